/*!
Persistence primitives for the workflow document.

The document persists as one JSON blob under a fixed key; any store with
get/set-whole-blob semantics qualifies. This module provides the
[`DocumentStore`] abstraction plus two implementations: an in-memory store
(tests, ephemeral sessions) and, behind the `sqlite` feature, a
SQLite-backed store using a single-row upsert table.

This module intentionally performs no migration logic; shape patching for
older documents lives in [`crate::migrations`] and runs before a loaded blob
is accepted by the engine.
*/

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use miette::Diagnostic;
use thiserror::Error;

use crate::utils::json_ext::JsonSerializable;

/// Fixed key the document blob is stored under.
pub const DOCUMENT_KEY: &str = "studioflow.document";

/// Serialization and backend errors for document persistence.
#[derive(Debug, Error, Diagnostic)]
pub enum PersistenceError {
    #[error("JSON serialization/deserialization failed: {source}")]
    #[diagnostic(
        code(studioflow::persistence::serde),
        help("Ensure the blob holds a JSON document produced by this crate (after migration).")
    )]
    Serde {
        #[from]
        source: serde_json::Error,
    },

    #[error("storage backend error: {message}")]
    #[diagnostic(
        code(studioflow::persistence::backend),
        help("Check that the store's database URL or backing state is valid and accessible.")
    )]
    Backend { message: String },
}

pub type Result<T> = std::result::Result<T, PersistenceError>;

/// Blanket JSON round-trip support for every serde-capable type, surfacing
/// failures as [`PersistenceError`].
impl<T> JsonSerializable<PersistenceError> for T
where
    T: serde::Serialize + for<'de> serde::de::DeserializeOwned,
{
    fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| PersistenceError::Serde { source: e })
    }

    fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| PersistenceError::Serde { source: e })
    }
}

/// A durable key-value blob store holding the serialized document.
///
/// Whole-blob semantics only: `load` returns the entire stored body (or
/// `None` the first time), `save` replaces it atomically. There is no
/// partial-write granularity, which is what makes "transactions" trivial —
/// every persist is a full-document value replacement.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn load(&self) -> Result<Option<String>>;
    async fn save(&self, body: &str) -> Result<()>;
}

/// Volatile in-memory store. The default for tests and throwaway sessions.
#[derive(Clone, Default)]
pub struct MemoryStore {
    blob: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a blob, as if a previous session had saved it.
    #[must_use]
    pub fn with_blob(body: impl Into<String>) -> Self {
        Self {
            blob: Arc::new(Mutex::new(Some(body.into()))),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn load(&self) -> Result<Option<String>> {
        let guard = self.blob.lock().map_err(|_| PersistenceError::Backend {
            message: "memory store lock poisoned".to_string(),
        })?;
        Ok(guard.clone())
    }

    async fn save(&self, body: &str) -> Result<()> {
        let mut guard = self.blob.lock().map_err(|_| PersistenceError::Backend {
            message: "memory store lock poisoned".to_string(),
        })?;
        *guard = Some(body.to_string());
        Ok(())
    }
}

#[cfg(feature = "sqlite")]
pub use sqlite_store::SqliteStore;

#[cfg(feature = "sqlite")]
mod sqlite_store {
    use sqlx::{Row, SqlitePool};
    use tracing::instrument;

    use super::{DOCUMENT_KEY, DocumentStore, PersistenceError, Result, async_trait};

    /// SQLite-backed document store: one row per document key in a small
    /// upsert table.
    ///
    /// Example URL: `sqlite://studioflow.db?mode=rwc` (the `mode=rwc` query
    /// parameter creates the file on first use).
    pub struct SqliteStore {
        pool: SqlitePool,
        key: String,
    }

    impl std::fmt::Debug for SqliteStore {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("SqliteStore").field("key", &self.key).finish()
        }
    }

    impl SqliteStore {
        /// Connect (or create) the database at `database_url` and ensure the
        /// documents table exists. Uses [`DOCUMENT_KEY`] as the row key.
        #[instrument(skip(database_url))]
        pub async fn connect(database_url: &str) -> Result<Self> {
            Self::connect_with_key(database_url, DOCUMENT_KEY).await
        }

        /// Same as [`connect`](Self::connect) with an explicit row key, for
        /// hosting several documents in one database file.
        pub async fn connect_with_key(database_url: &str, key: &str) -> Result<Self> {
            let pool = SqlitePool::connect(database_url)
                .await
                .map_err(backend_error)?;
            sqlx::query(
                "CREATE TABLE IF NOT EXISTS documents (
                     name TEXT PRIMARY KEY,
                     body TEXT NOT NULL,
                     updated_at TEXT NOT NULL
                 )",
            )
            .execute(&pool)
            .await
            .map_err(backend_error)?;
            Ok(Self {
                pool,
                key: key.to_string(),
            })
        }
    }

    #[async_trait]
    impl DocumentStore for SqliteStore {
        #[instrument(skip(self))]
        async fn load(&self) -> Result<Option<String>> {
            let row = sqlx::query("SELECT body FROM documents WHERE name = ?1")
                .bind(&self.key)
                .fetch_optional(&self.pool)
                .await
                .map_err(backend_error)?;
            Ok(row.map(|r| r.get::<String, _>("body")))
        }

        #[instrument(skip(self, body), fields(bytes = body.len()))]
        async fn save(&self, body: &str) -> Result<()> {
            sqlx::query(
                "INSERT INTO documents (name, body, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(name) DO UPDATE SET
                     body = excluded.body,
                     updated_at = excluded.updated_at",
            )
            .bind(&self.key)
            .bind(body)
            .bind(chrono::Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(backend_error)?;
            Ok(())
        }
    }

    fn backend_error(e: sqlx::Error) -> PersistenceError {
        PersistenceError::Backend {
            message: e.to_string(),
        }
    }
}
