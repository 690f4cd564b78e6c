use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A structured notification emitted by the engine or its adapters.
///
/// Three families: `Command` (a command was applied to the document),
/// `Persistence` (load/save/migrate activity at the adapter boundary), and
/// `Diagnostic` (everything else worth surfacing).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    Command(CommandEvent),
    Persistence(PersistenceEvent),
    Diagnostic(DiagnosticEvent),
}

impl Event {
    /// Event for a command the engine just applied.
    pub fn command_applied(kind: impl Into<String>, channel_id: Option<String>) -> Self {
        Event::Command(CommandEvent {
            kind: kind.into(),
            channel_id,
            when: Utc::now(),
        })
    }

    /// Event for persistence-adapter activity (`scope` is one of
    /// `load`/`save`/`migrate`).
    pub fn persistence(scope: impl Into<String>, message: impl Into<String>) -> Self {
        Event::Persistence(PersistenceEvent {
            scope: scope.into(),
            message: message.into(),
        })
    }

    pub fn diagnostic(scope: impl Into<String>, message: impl Into<String>) -> Self {
        Event::Diagnostic(DiagnosticEvent {
            scope: scope.into(),
            message: message.into(),
        })
    }

    /// Short label identifying where the event came from.
    #[must_use]
    pub fn scope_label(&self) -> &str {
        match self {
            Event::Command(_) => "command",
            Event::Persistence(p) => &p.scope,
            Event::Diagnostic(d) => &d.scope,
        }
    }

    /// Human-readable one-line description.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Event::Command(c) => match &c.channel_id {
                Some(channel) => format!("applied {} (channel {channel})", c.kind),
                None => format!("applied {}", c.kind),
            },
            Event::Persistence(p) => p.message.clone(),
            Event::Diagnostic(d) => d.message.clone(),
        }
    }

    /// Normalized JSON form for sinks that forward events to other systems.
    ///
    /// ```
    /// use studioflow::event_bus::Event;
    ///
    /// let json = Event::command_applied("ADD_TITLES", Some("c1".into())).to_json_value();
    /// assert_eq!(json["type"], "command");
    /// assert_eq!(json["metadata"]["kind"], "ADD_TITLES");
    /// assert_eq!(json["metadata"]["channel_id"], "c1");
    /// ```
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let (event_type, metadata) = match self {
            Event::Command(c) => (
                "command",
                json!({
                    "kind": c.kind,
                    "channel_id": c.channel_id,
                    "when": c.when.to_rfc3339(),
                }),
            ),
            Event::Persistence(_) => ("persistence", json!({})),
            Event::Diagnostic(_) => ("diagnostic", json!({})),
        };
        json!({
            "type": event_type,
            "scope": self.scope_label(),
            "message": self.message(),
            "metadata": metadata,
        })
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.scope_label(), self.message())
    }
}

/// A command was applied to the document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandEvent {
    /// Stable command tag, e.g. `ADD_PROJECT`.
    pub kind: String,
    /// Channel the command addressed, when it addressed one.
    pub channel_id: Option<String>,
    pub when: DateTime<Utc>,
}

/// Load/save/migrate activity at the persistence boundary.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersistenceEvent {
    pub scope: String,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticEvent {
    pub scope: String,
    pub message: String,
}
