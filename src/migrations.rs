//! Versioned shape migrations for loaded documents.
//!
//! Documents written by earlier releases may predate parts of the current
//! schema. Before a loaded blob reaches the engine (i.e. before the first
//! `LoadState`), it passes through an ordered pipeline of named, pure,
//! idempotent JSON transforms. Idempotence matters: migrating an
//! already-migrated document is a fixed point, so running the pipeline on
//! every load is always safe.
//!
//! Current pipeline:
//!
//! 1. `seed-editor-roster` — channels saved before render editors existed
//!    get the standard two-slot Free roster.
//! 2. `modernize-editor-assignment` — editors saved with the legacy
//!    `currentTask` field lose it (and any current assignment is cleared);
//!    editors missing a `queue` get an empty one.

use serde_json::{Value, json};
use tracing::debug;

use crate::document::{Document, Editor};
use crate::persistence::{PersistenceError, Result};
use crate::utils::id_generator::IdGenerator;

/// One named, pure document transform. Every migration must be idempotent.
pub struct Migration {
    pub name: &'static str,
    run: fn(Value) -> Value,
}

impl Migration {
    /// Apply this migration to a JSON document.
    #[must_use]
    pub fn apply(&self, document: Value) -> Value {
        (self.run)(document)
    }
}

/// The ordered migration pipeline, oldest shape-fix first.
#[must_use]
pub fn pipeline() -> &'static [Migration] {
    static PIPELINE: &[Migration] = &[
        Migration {
            name: "seed-editor-roster",
            run: seed_editor_roster,
        },
        Migration {
            name: "modernize-editor-assignment",
            run: modernize_editor_assignment,
        },
    ];
    PIPELINE
}

/// Run the full pipeline over a JSON document.
#[must_use]
pub fn migrate(document: Value) -> Value {
    pipeline().iter().fold(document, |doc, migration| {
        debug!(migration = migration.name, "running document migration");
        migration.apply(doc)
    })
}

/// Parse a raw blob, migrate it, and deserialize the result into a
/// [`Document`]. This is the only supported path from stored bytes to an
/// engine-acceptable document.
pub fn load_document(raw: &str) -> Result<Document> {
    let value: Value = serde_json::from_str(raw)?;
    let migrated = migrate(value);
    serde_json::from_value(migrated).map_err(|source| PersistenceError::Serde { source })
}

fn channels_mut(document: &mut Value) -> Option<&mut Vec<Value>> {
    document.get_mut("channels")?.as_array_mut()
}

/// Channels persisted before the render roster existed get two Free editors.
fn seed_editor_roster(mut document: Value) -> Value {
    let Some(channels) = channels_mut(&mut document) else {
        return document;
    };
    for channel in channels.iter_mut() {
        let Some(obj) = channel.as_object_mut() else {
            continue;
        };
        let missing = match obj.get("editors") {
            None | Some(Value::Null) => true,
            Some(_) => false,
        };
        if missing {
            let roster = serde_json::to_value(Editor::default_roster(&IdGenerator::new()))
                .unwrap_or_else(|_| json!([]));
            obj.insert("editors".to_string(), roster);
        }
    }
    document
}

/// Strip the legacy `currentTask` field (clearing any current assignment
/// with it) and guarantee every editor carries a queue.
fn modernize_editor_assignment(mut document: Value) -> Value {
    let Some(channels) = channels_mut(&mut document) else {
        return document;
    };
    for channel in channels.iter_mut() {
        let Some(editors) = channel.get_mut("editors").and_then(Value::as_array_mut) else {
            continue;
        };
        for editor in editors.iter_mut() {
            let Some(obj) = editor.as_object_mut() else {
                continue;
            };
            if !obj.contains_key("queue") {
                obj.insert("queue".to_string(), json!([]));
            }
            if obj.remove("currentTask").is_some() {
                // Whatever the legacy field pointed at is not trustworthy as
                // a project id; the assignment starts over cleared.
                obj.remove("currentProjectId");
            }
        }
    }
    document
}
