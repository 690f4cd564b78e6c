//! Environment-driven configuration for binaries embedding the engine.

use crate::persistence::DOCUMENT_KEY;

/// Runtime configuration resolved from the environment.
///
/// Reads a `.env` file when present (via `dotenvy`), then the process
/// environment:
///
/// - `STUDIOFLOW_DATABASE_URL` — SQLite URL for the durable store; when
///   unset, callers should fall back to an in-memory store.
/// - `STUDIOFLOW_DOCUMENT_KEY` — row key for the document blob, defaulting
///   to [`DOCUMENT_KEY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub database_url: Option<String>,
    pub document_key: String,
}

impl EngineConfig {
    /// Load configuration from `.env` and the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        EngineConfig {
            database_url: std::env::var("STUDIOFLOW_DATABASE_URL").ok(),
            document_key: std::env::var("STUDIOFLOW_DOCUMENT_KEY")
                .unwrap_or_else(|_| DOCUMENT_KEY.to_string()),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            database_url: None,
            document_key: DOCUMENT_KEY.to_string(),
        }
    }
}
