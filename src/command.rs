//! The command vocabulary the workflow engine understands.
//!
//! Commands are the only way state changes: the presentation layer builds a
//! [`Command`] from a user intent and hands it to
//! [`reducer::apply`](crate::reducer::apply) (usually via
//! [`WorkflowEngine`](crate::engine::WorkflowEngine)).
//!
//! # Wire format
//!
//! Commands serialize adjacently tagged as `{"type": ..., "payload": ...}`
//! with SCREAMING_SNAKE_CASE tags, which is also the shape dispatched by the
//! UI layer. Tags the engine does not recognize deserialize to
//! [`Command::Unknown`] and are applied as no-ops, so newer front-ends can
//! talk to an older engine without breaking it.
//!
//! ```rust
//! use studioflow::command::Command;
//!
//! let cmd: Command = serde_json::from_str(
//!     r#"{"type": "ADD_TITLES", "payload": {"channelId": "c1", "titles": ["A", "B"]}}"#,
//! ).unwrap();
//! assert!(matches!(cmd, Command::AddTitles { .. }));
//!
//! // Forward compatibility: unrecognized tags become no-ops, not errors.
//! let cmd: Command = serde_json::from_str(r#"{"type": "EXPORT_REPORT"}"#).unwrap();
//! assert!(matches!(cmd, Command::Unknown));
//! ```

use serde::{Deserialize, Serialize};

use crate::document::{Channel, Document, EditorStatus, ProjectStatus};

/// Draft of an uploaded file before the engine assigns it an id.
///
/// Mirrors [`FileData`](crate::document::FileData) minus `id`; `content` must
/// already be a data URI (see [`crate::files`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub size: u64,
    pub last_modified: i64,
    pub content: String,
}

/// A user intent the reducer knows how to apply.
///
/// `DeleteChannel` and `UseTitleForProject` are part of the declared
/// vocabulary but have no reducer case; they apply as no-ops. This matches
/// the shipped front-end, where neither intent is wired to a control.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Command {
    /// Replace the document wholesale. Used by the persistence adapter after
    /// migration; not something the presentation layer dispatches.
    LoadState(Document),
    AddChannel {
        name: String,
        niche: String,
        sub_niche: String,
        language: crate::document::Language,
    },
    /// Wholesale replacement of the matching channel: last write wins, the
    /// caller supplies the complete already-edited record.
    UpdateChannel(Channel),
    DeleteChannel {
        channel_id: String,
    },
    AddProject {
        channel_id: String,
        project_name: String,
        title_id: String,
    },
    UpdateProjectStatus {
        channel_id: String,
        project_id: String,
        status: ProjectStatus,
    },
    DeleteProject {
        channel_id: String,
        project_id: String,
    },
    AddTitles {
        channel_id: String,
        titles: Vec<String>,
    },
    UseTitleForProject {
        channel_id: String,
        title_id: String,
    },
    DeleteTitle {
        channel_id: String,
        title_id: String,
    },
    UploadFile {
        channel_id: String,
        project_id: String,
        file: FileDraft,
    },
    DeleteFile {
        channel_id: String,
        project_id: String,
        file_id: String,
    },
    AssignVideoGeneration {
        channel_id: String,
        project_id: String,
        editor_id: String,
    },
    StopVideoGeneration {
        channel_id: String,
        editor_id: String,
    },
    /// Administrative override that writes editor status and current project
    /// directly, bypassing the queue invariants.
    UpdateEditorStatus {
        channel_id: String,
        editor_id: String,
        status: EditorStatus,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        current_project_id: Option<String>,
    },
    /// Catch-all for tags this engine version does not know.
    #[serde(other)]
    Unknown,
}

impl Command {
    /// Stable label for tracing and event emission.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Command::LoadState(_) => "LOAD_STATE",
            Command::AddChannel { .. } => "ADD_CHANNEL",
            Command::UpdateChannel(_) => "UPDATE_CHANNEL",
            Command::DeleteChannel { .. } => "DELETE_CHANNEL",
            Command::AddProject { .. } => "ADD_PROJECT",
            Command::UpdateProjectStatus { .. } => "UPDATE_PROJECT_STATUS",
            Command::DeleteProject { .. } => "DELETE_PROJECT",
            Command::AddTitles { .. } => "ADD_TITLES",
            Command::UseTitleForProject { .. } => "USE_TITLE_FOR_PROJECT",
            Command::DeleteTitle { .. } => "DELETE_TITLE",
            Command::UploadFile { .. } => "UPLOAD_FILE",
            Command::DeleteFile { .. } => "DELETE_FILE",
            Command::AssignVideoGeneration { .. } => "ASSIGN_VIDEO_GENERATION",
            Command::StopVideoGeneration { .. } => "STOP_VIDEO_GENERATION",
            Command::UpdateEditorStatus { .. } => "UPDATE_EDITOR_STATUS",
            Command::Unknown => "UNKNOWN",
        }
    }

    /// Channel the command addresses, when it addresses one.
    #[must_use]
    pub fn channel_id(&self) -> Option<&str> {
        match self {
            Command::LoadState(_) | Command::AddChannel { .. } | Command::Unknown => None,
            Command::UpdateChannel(channel) => Some(&channel.id),
            Command::DeleteChannel { channel_id }
            | Command::AddProject { channel_id, .. }
            | Command::UpdateProjectStatus { channel_id, .. }
            | Command::DeleteProject { channel_id, .. }
            | Command::AddTitles { channel_id, .. }
            | Command::UseTitleForProject { channel_id, .. }
            | Command::DeleteTitle { channel_id, .. }
            | Command::UploadFile { channel_id, .. }
            | Command::DeleteFile { channel_id, .. }
            | Command::AssignVideoGeneration { channel_id, .. }
            | Command::StopVideoGeneration { channel_id, .. }
            | Command::UpdateEditorStatus { channel_id, .. } => Some(channel_id),
        }
    }
}
