//! The application document: the single tree of state the workflow engine
//! owns and the persistence adapter serializes.
//!
//! Everything hangs off [`Document`]: channels own titles, projects, useful
//! links, settings, and a fixed roster of render editors. The reducer (see
//! [`crate::reducer`]) is the only code that mutates a document; the
//! presentation layer receives read-only views and round-trips edits through
//! commands.
//!
//! # Wire format
//!
//! All types serialize with camelCase field names so documents written by
//! earlier releases load unchanged (the migration pipeline in
//! [`crate::migrations`] patches older shapes before deserialization).
//!
//! # Examples
//!
//! ```rust
//! use studioflow::document::{Channel, Document, Language};
//!
//! let mut doc = Document::default();
//! doc.channels.push(Channel::new("True Stories", "History", "WW2", Language::English));
//!
//! let channel = &doc.channels[0];
//! assert_eq!(channel.editors.len(), 2);
//! assert!(channel.titles.is_empty());
//! ```

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::id_generator::IdGenerator;

/// Root of the persisted application state.
///
/// The engine's reducer consumes and returns whole documents; persistence
/// writes the entire tree as one blob. There is deliberately no partial-write
/// granularity below this type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Document {
    #[serde(default)]
    pub channels: Vec<Channel>,
}

impl Document {
    /// Look up a channel by id.
    #[must_use]
    pub fn channel(&self, channel_id: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.id == channel_id)
    }

    /// Mutable lookup of a channel by id.
    pub fn channel_mut(&mut self, channel_id: &str) -> Option<&mut Channel> {
        self.channels.iter_mut().find(|c| c.id == channel_id)
    }
}

/// Spoken/written language a channel publishes in.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Language {
    Portuguese,
    #[default]
    English,
    Spanish,
    Croatian,
}

/// A content-production unit: its own titles, projects, settings, and a
/// fixed two-editor render roster created with the channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub niche: String,
    pub sub_niche: String,
    pub language: Language,
    #[serde(default)]
    pub general_info: String,
    #[serde(default)]
    pub useful_links: Vec<UsefulLink>,
    #[serde(default)]
    pub settings: ChannelSettings,
    #[serde(default)]
    pub titles: Vec<VideoTitle>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub editors: Vec<Editor>,
    /// Calendar date of the most recent published post, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_post_date: Option<NaiveDate>,
}

impl Channel {
    /// Build a fresh channel with default settings, an empty title/project
    /// backlog, and the standard two-editor roster.
    ///
    /// `last_post_date` is seeded to two days ago so a brand-new channel
    /// starts in the "late" posting bucket rather than looking up to date.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        niche: impl Into<String>,
        sub_niche: impl Into<String>,
        language: Language,
    ) -> Self {
        let ids = IdGenerator::new();
        Channel {
            id: ids.generate(),
            name: name.into(),
            niche: niche.into(),
            sub_niche: sub_niche.into(),
            language,
            general_info: String::new(),
            useful_links: Vec::new(),
            settings: ChannelSettings::default(),
            titles: Vec::new(),
            projects: Vec::new(),
            editors: Editor::default_roster(&ids),
            last_post_date: Some((Utc::now() - Duration::days(2)).date_naive()),
        }
    }

    /// Look up a title by id.
    #[must_use]
    pub fn title(&self, title_id: &str) -> Option<&VideoTitle> {
        self.titles.iter().find(|t| t.id == title_id)
    }

    pub fn title_mut(&mut self, title_id: &str) -> Option<&mut VideoTitle> {
        self.titles.iter_mut().find(|t| t.id == title_id)
    }

    /// Look up a project by id.
    #[must_use]
    pub fn project(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    pub fn project_mut(&mut self, project_id: &str) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == project_id)
    }

    /// Look up a render editor by id.
    #[must_use]
    pub fn editor(&self, editor_id: &str) -> Option<&Editor> {
        self.editors.iter().find(|e| e.id == editor_id)
    }

    pub fn editor_mut(&mut self, editor_id: &str) -> Option<&mut Editor> {
        self.editors.iter_mut().find(|e| e.id == editor_id)
    }
}

/// A bookmarked reference link attached to a channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsefulLink {
    pub id: String,
    pub url: String,
}

/// Per-channel production configuration.
///
/// Four fixed sub-groups of flat primitive fields. Purely descriptive: the
/// engine enforces no cross-field invariants here; the values steer the
/// human production process downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChannelSettings {
    #[serde(default)]
    pub script: ScriptSettings,
    #[serde(default)]
    pub image: ImageSettings,
    #[serde(default)]
    pub voice: VoiceSettings,
    #[serde(default)]
    pub video: VideoSettings,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum NarrationStyle {
    #[default]
    FirstPerson,
    ThirdPerson,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum VoiceGender {
    #[default]
    Male,
    Female,
}

/// Tool the channel's videos are assembled with.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum RenderTool {
    #[default]
    CapCut,
    GoogleTts,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScriptSettings {
    pub words_per_part: u32,
    /// Target video length in minutes.
    pub video_duration_minutes: u32,
    pub country: String,
    pub narration_style: NarrationStyle,
    pub voice_gender: VoiceGender,
    #[serde(default)]
    pub notes: String,
}

impl Default for ScriptSettings {
    fn default() -> Self {
        ScriptSettings {
            words_per_part: 300,
            video_duration_minutes: 10,
            country: "Brasil".to_string(),
            narration_style: NarrationStyle::FirstPerson,
            voice_gender: VoiceGender::Male,
            notes: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageSettings {
    #[serde(default)]
    pub protagonist_info: String,
    #[serde(default)]
    pub environment: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub framing: String,
    pub variations: u32,
    pub use_story_scenes: bool,
    pub scene_count: u32,
}

impl Default for ImageSettings {
    fn default() -> Self {
        ImageSettings {
            protagonist_info: String::new(),
            environment: String::new(),
            style: String::new(),
            framing: String::new(),
            variations: 4,
            use_story_scenes: true,
            scene_count: 10,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoiceSettings {
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoSettings {
    pub use_overlay: bool,
    pub editor: RenderTool,
}

/// Lifecycle of a candidate video title.
///
/// Available -> InProduction when a project claims it; back to Available
/// when that project is deleted; Used is reserved for titles whose video
/// shipped.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TitleStatus {
    #[default]
    Available,
    InProduction,
    Used,
}

/// A candidate video title tracked through the production pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoTitle {
    pub id: String,
    pub text: String,
    pub status: TitleStatus,
}

/// Primary workflow state of a project.
///
/// The conventional progression is Planning -> Scripting -> Recording ->
/// (InQueue | Editing) -> Completed -> Published, but the engine does not
/// enforce it: `UpdateProjectStatus` is a free-form override and only the
/// render-assignment commands move projects through InQueue/Editing/Planning
/// on their own.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProjectStatus {
    #[default]
    Planning,
    Scripting,
    Recording,
    InQueue,
    Editing,
    Completed,
    Published,
}

/// One video's production record, linked to exactly one title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Non-owning reference to a title in the same channel.
    pub title_id: String,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub files: Vec<FileData>,
}

/// An uploaded asset owned by exactly one project.
///
/// `content` is a self-describing data URI (media-type prefix + base64
/// body), so the payload rides inside the same JSON blob as the rest of the
/// document. There is no versioning: replacing a file is delete + upload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileData {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub media_type: String,
    /// Size in bytes of the decoded payload.
    pub size: u64,
    /// Source mtime in milliseconds since the Unix epoch.
    pub last_modified: i64,
    pub content: String,
}

/// Availability of a render editor slot.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum EditorStatus {
    #[default]
    Free,
    Busy,
}

/// A simulated render-capacity slot (not a text editor): one active project
/// plus a FIFO wait queue of pending project ids.
///
/// Invariant maintained by the reducer: `status == Busy` iff
/// `current_project_id` is set. `UpdateEditorStatus` is the administrative
/// override that can bypass this.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Editor {
    pub id: String,
    pub name: String,
    pub status: EditorStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_project_id: Option<String>,
    #[serde(default)]
    pub queue: Vec<String>,
}

impl Editor {
    /// A free editor with an empty queue.
    #[must_use]
    pub fn free(id: impl Into<String>, name: impl Into<String>) -> Self {
        Editor {
            id: id.into(),
            name: name.into(),
            status: EditorStatus::Free,
            current_project_id: None,
            queue: Vec::new(),
        }
    }

    /// The fixed two-slot roster every channel is created with. Also used by
    /// the migration pipeline when loading documents that predate editors.
    #[must_use]
    pub fn default_roster(ids: &IdGenerator) -> Vec<Editor> {
        vec![
            Editor::free(ids.generate(), "Editor 1"),
            Editor::free(ids.generate(), "Editor 2"),
        ]
    }

    /// True when this editor can take a project immediately.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.status == EditorStatus::Free
    }
}
