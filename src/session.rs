//! The async adapter that ties the engine to a durable store.
//!
//! [`WorkflowSession`] owns a [`WorkflowEngine`] plus a [`DocumentStore`]
//! and implements the persistence contract: load-and-migrate once on open,
//! save the whole document after every dispatched command. I/O failures
//! never reach the document — a failed load starts the session at the empty
//! initial document, a failed save leaves the in-memory document as the
//! source of truth for the rest of the session. Both are logged, neither is
//! propagated.
//!
//! # Examples
//!
//! ```rust
//! use studioflow::command::Command;
//! use studioflow::document::Language;
//! use studioflow::event_bus::EventBus;
//! use studioflow::persistence::MemoryStore;
//! use studioflow::session::WorkflowSession;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut session =
//!     WorkflowSession::open_with_bus(MemoryStore::new(), EventBus::quiet()).await;
//! session
//!     .dispatch(Command::AddChannel {
//!         name: "True Stories".into(),
//!         niche: "History".into(),
//!         sub_niche: "WW2".into(),
//!         language: Language::English,
//!     })
//!     .await;
//! assert_eq!(session.document().channels.len(), 1);
//! # }
//! ```

use tracing::{error, instrument, warn};

use crate::command::Command;
use crate::document::Document;
use crate::engine::WorkflowEngine;
use crate::event_bus::{Event, EventBus};
use crate::migrations;
use crate::persistence::DocumentStore;
use crate::utils::json_ext::JsonSerializable;

/// An engine bound to a durable store for the lifetime of a user session.
pub struct WorkflowSession<S: DocumentStore> {
    engine: WorkflowEngine,
    store: S,
}

impl<S: DocumentStore> WorkflowSession<S> {
    /// Open a session with the default (stdout) event bus.
    pub async fn open(store: S) -> Self {
        Self::open_with_bus(store, EventBus::default()).await
    }

    /// Open a session, loading and migrating any previously saved document.
    ///
    /// A missing blob, a load failure, or an unparseable blob all resolve to
    /// the empty initial document; the session still opens.
    #[instrument(skip(store, event_bus))]
    pub async fn open_with_bus(store: S, event_bus: EventBus) -> Self {
        let emitter = event_bus.sender();
        let document = match store.load().await {
            Ok(Some(raw)) => match migrations::load_document(&raw) {
                Ok(document) => {
                    let _ = emitter.send(Event::persistence(
                        "load",
                        format!("loaded document with {} channel(s)", document.channels.len()),
                    ));
                    document
                }
                Err(e) => {
                    warn!(error = %e, "stored document unreadable, starting empty");
                    let _ = emitter.send(Event::persistence(
                        "load",
                        "stored document unreadable, starting empty",
                    ));
                    Document::default()
                }
            },
            Ok(None) => Document::default(),
            Err(e) => {
                warn!(error = %e, "document load failed, starting empty");
                let _ = emitter.send(Event::persistence(
                    "load",
                    "document load failed, starting empty",
                ));
                Document::default()
            }
        };

        let mut engine = WorkflowEngine::with_bus(event_bus);
        engine.apply(Command::LoadState(document));
        Self { engine, store }
    }

    /// Apply one command and persist the resulting document.
    ///
    /// Save failures are logged and swallowed; the in-memory document
    /// remains authoritative.
    #[instrument(skip(self, command), fields(kind = command.kind()))]
    pub async fn dispatch(&mut self, command: Command) -> &Document {
        self.engine.apply(command);
        self.persist().await;
        self.engine.document()
    }

    async fn persist(&self) {
        let body = match self.engine.document().to_json_string() {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, "document failed to serialize, skipping save");
                return;
            }
        };
        if let Err(e) = self.store.save(&body).await {
            error!(error = %e, "document save failed, keeping in-memory state");
            let _ = self
                .engine
                .event_bus()
                .sender()
                .send(Event::persistence("save", "document save failed"));
        }
    }

    /// Read-only view of the current document.
    #[must_use]
    pub fn document(&self) -> &Document {
        self.engine.document()
    }

    /// The engine this session wraps.
    #[must_use]
    pub fn engine(&self) -> &WorkflowEngine {
        &self.engine
    }

    /// Consume the session, returning the engine and the store.
    #[must_use]
    pub fn into_parts(self) -> (WorkflowEngine, S) {
        (self.engine, self.store)
    }
}
