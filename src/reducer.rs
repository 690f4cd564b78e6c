//! The state-transition engine: one pure function from document + command to
//! the next document.
//!
//! [`apply`] is total, synchronous, and performs no I/O. Commands that
//! reference ids the document does not contain, and command types the engine
//! does not recognize, return the input document unchanged. That silent
//! no-op policy is the contract, not an accident: commands are always
//! derived from a view of the current document, so "not found" means the
//! caller raced itself, which a single-threaded reducer makes impossible.
//!
//! # Render assignment
//!
//! Two cooperating state machines meet here: project status and editor
//! status. `AssignVideoGeneration` either dispatches immediately (free
//! editor -> Busy, project -> Editing) or enqueues FIFO (project ->
//! InQueue). `StopVideoGeneration` discards the in-flight render (project
//! back to Planning) and promotes the queue head, if any. Nothing models a
//! render *finishing*: completion is driven manually through
//! `UpdateProjectStatus`, decoupled from editor release.
//!
//! # Examples
//!
//! ```rust
//! use studioflow::command::Command;
//! use studioflow::document::{Document, Language};
//! use studioflow::reducer::apply;
//!
//! let doc = apply(
//!     Document::default(),
//!     Command::AddChannel {
//!         name: "True Stories".into(),
//!         niche: "History".into(),
//!         sub_niche: "WW2".into(),
//!         language: Language::English,
//!     },
//! );
//! assert_eq!(doc.channels.len(), 1);
//! ```

use chrono::Utc;
use tracing::debug;

use crate::command::Command;
use crate::document::{
    Channel, Document, Editor, EditorStatus, FileData, Project, ProjectStatus, TitleStatus,
    VideoTitle,
};
use crate::utils::id_generator::IdGenerator;

/// Apply one command to the document, returning the next document.
///
/// Pure and total: never panics, never errors, never touches anything
/// outside its arguments (ids and timestamps are generated here, which is
/// the one place the engine reads a clock and randomness).
#[must_use]
pub fn apply(document: Document, command: Command) -> Document {
    match command {
        Command::LoadState(next) => next,

        Command::AddChannel {
            name,
            niche,
            sub_niche,
            language,
        } => {
            let mut document = document;
            document
                .channels
                .push(Channel::new(name, niche, sub_niche, language));
            document
        }

        Command::UpdateChannel(updated) => {
            let mut document = document;
            if let Some(existing) = document.channel_mut(&updated.id) {
                *existing = updated;
            } else {
                debug!(channel = %updated.id, "UpdateChannel: unknown channel, no-op");
            }
            document
        }

        Command::AddProject {
            channel_id,
            project_name,
            title_id,
        } => with_channel(document, &channel_id, |channel| {
            let project = Project {
                id: IdGenerator::new().generate(),
                name: project_name,
                title_id: title_id.clone(),
                status: ProjectStatus::Planning,
                created_at: Utc::now(),
                files: Vec::new(),
            };
            channel.projects.push(project);
            // The caller filters the choices down to Available titles; the
            // engine claims whatever it is handed.
            if let Some(title) = channel.title_mut(&title_id) {
                title.status = TitleStatus::InProduction;
            }
        }),

        Command::UpdateProjectStatus {
            channel_id,
            project_id,
            status,
        } => with_channel(document, &channel_id, |channel| {
            if let Some(project) = channel.project_mut(&project_id) {
                project.status = status;
            }
        }),

        Command::DeleteProject {
            channel_id,
            project_id,
        } => with_channel(document, &channel_id, |channel| {
            let Some(index) = channel.projects.iter().position(|p| p.id == project_id) else {
                return;
            };
            let removed = channel.projects.remove(index);
            // Release the claimed title back into the Available pool.
            if let Some(title) = channel.title_mut(&removed.title_id) {
                title.status = TitleStatus::Available;
            }
        }),

        Command::AddTitles { channel_id, titles } => {
            with_channel(document, &channel_id, |channel| {
                let ids = IdGenerator::new();
                channel
                    .titles
                    .extend(titles.into_iter().filter(|t| !t.trim().is_empty()).map(
                        |text| VideoTitle {
                            id: ids.generate(),
                            text,
                            status: TitleStatus::Available,
                        },
                    ));
            })
        }

        // No referential-integrity check: deleting a title still referenced
        // by a live project leaves that project's title_id dangling. The
        // presentation layer only offers deletion for Available titles.
        Command::DeleteTitle {
            channel_id,
            title_id,
        } => with_channel(document, &channel_id, |channel| {
            channel.titles.retain(|t| t.id != title_id);
        }),

        Command::UploadFile {
            channel_id,
            project_id,
            file,
        } => with_channel(document, &channel_id, |channel| {
            if let Some(project) = channel.project_mut(&project_id) {
                project.files.push(FileData {
                    id: IdGenerator::new().generate(),
                    name: file.name,
                    media_type: file.media_type,
                    size: file.size,
                    last_modified: file.last_modified,
                    content: file.content,
                });
            }
        }),

        Command::DeleteFile {
            channel_id,
            project_id,
            file_id,
        } => with_channel(document, &channel_id, |channel| {
            if let Some(project) = channel.project_mut(&project_id) {
                project.files.retain(|f| f.id != file_id);
            }
        }),

        Command::AssignVideoGeneration {
            channel_id,
            project_id,
            editor_id,
        } => with_channel(document, &channel_id, |channel| {
            assign_video_generation(channel, &project_id, &editor_id);
        }),

        Command::StopVideoGeneration {
            channel_id,
            editor_id,
        } => with_channel(document, &channel_id, |channel| {
            stop_video_generation(channel, &editor_id);
        }),

        Command::UpdateEditorStatus {
            channel_id,
            editor_id,
            status,
            current_project_id,
        } => with_channel(document, &channel_id, |channel| {
            if let Some(editor) = channel.editor_mut(&editor_id) {
                editor.status = status;
                editor.current_project_id = current_project_id;
            }
        }),

        // Declared vocabulary without a handler (DeleteChannel,
        // UseTitleForProject) and tags from newer front-ends both land here.
        Command::DeleteChannel { .. } | Command::UseTitleForProject { .. } | Command::Unknown => {
            debug!(kind = command.kind(), "unhandled command, no-op");
            document
        }
    }
}

/// Run `mutate` against the named channel, or return the document unchanged
/// when the channel does not exist. All channel-scoped commands funnel
/// through this so the no-op policy lives in one place.
fn with_channel<F>(mut document: Document, channel_id: &str, mutate: F) -> Document
where
    F: FnOnce(&mut Channel),
{
    match document.channel_mut(channel_id) {
        Some(channel) => mutate(channel),
        None => debug!(channel = %channel_id, "unknown channel, no-op"),
    }
    document
}

fn assign_video_generation(channel: &mut Channel, project_id: &str, editor_id: &str) {
    // Both ends must resolve before anything is touched.
    if channel.project(project_id).is_none() {
        return;
    }
    let Some(editor) = channel.editor_mut(editor_id) else {
        return;
    };

    let project_status = if editor.is_free() {
        editor.status = EditorStatus::Busy;
        editor.current_project_id = Some(project_id.to_string());
        ProjectStatus::Editing
    } else {
        editor.queue.push(project_id.to_string());
        ProjectStatus::InQueue
    };

    if let Some(project) = channel.project_mut(project_id) {
        project.status = project_status;
    }
}

fn stop_video_generation(channel: &mut Channel, editor_id: &str) {
    let Some(editor) = channel.editor(editor_id) else {
        return;
    };
    let Some(stopped_project_id) = editor.current_project_id.clone() else {
        return;
    };

    // The in-flight render is discarded, not checkpointed.
    if let Some(project) = channel.project_mut(&stopped_project_id) {
        project.status = ProjectStatus::Planning;
    }

    let next_project_id = channel
        .editor(editor_id)
        .and_then(|e| e.queue.first().cloned());

    match next_project_id {
        Some(next_id) => {
            if let Some(project) = channel.project_mut(&next_id) {
                project.status = ProjectStatus::Editing;
            }
            if let Some(editor) = channel.editor_mut(editor_id) {
                editor.current_project_id = Some(next_id);
                editor.queue.remove(0);
            }
        }
        None => {
            if let Some(editor) = channel.editor_mut(editor_id) {
                editor.status = EditorStatus::Free;
                editor.current_project_id = None;
            }
        }
    }
}

/// Selection policy for automatic assignment: the first Free editor in
/// channel order, otherwise the editor with the shortest queue (ties broken
/// by first encountered). Returns `None` only when the channel has no
/// editors at all.
///
/// This is a convenience for callers; pair it with
/// [`Command::AssignVideoGeneration`] to get the "assign to anyone" button.
#[must_use]
pub fn select_editor(channel: &Channel) -> Option<&Editor> {
    if let Some(free) = channel.editors.iter().find(|e| e.is_free()) {
        return Some(free);
    }
    channel.editors.iter().min_by_key(|e| e.queue.len())
}
