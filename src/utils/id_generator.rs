//! Fresh-id generation for channels, titles, projects, files, and editors.

use uuid::Uuid;

/// Generates globally unique string ids (UUID v4).
///
/// Stateless; exists as a type so call sites read as intent
/// (`ids.generate()`) and so tests could swap in a deterministic source if
/// that ever becomes necessary.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdGenerator;

impl IdGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// A fresh globally unique id.
    #[must_use]
    pub fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
