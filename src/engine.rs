//! The engine object: explicit owner of the document.
//!
//! [`WorkflowEngine`] replaces the "ambient global state + implicit
//! re-render" pattern with a value you construct, hold, and talk to. It owns
//! the [`Document`], funnels every mutation through the pure reducer, and
//! emits one event per applied command on its [`EventBus`] so observers
//! (view layers, persistence, tests) can react without reaching into the
//! document themselves.
//!
//! # Examples
//!
//! ```rust
//! use studioflow::command::Command;
//! use studioflow::document::Language;
//! use studioflow::engine::WorkflowEngine;
//! use studioflow::event_bus::EventBus;
//!
//! let mut engine = WorkflowEngine::with_bus(EventBus::quiet());
//! engine.apply(Command::AddChannel {
//!     name: "True Stories".into(),
//!     niche: "History".into(),
//!     sub_niche: "WW2".into(),
//!     language: Language::English,
//! });
//! assert_eq!(engine.document().channels.len(), 1);
//! ```

use tracing::debug;

use crate::command::Command;
use crate::document::Document;
use crate::event_bus::{Event, EventBus};
use crate::reducer;

/// Deterministic, synchronous owner of the application document.
///
/// All mutation goes through [`apply`](WorkflowEngine::apply); reads go
/// through [`document`](WorkflowEngine::document) or
/// [`snapshot`](WorkflowEngine::snapshot). There is no other way in.
pub struct WorkflowEngine {
    document: Document,
    event_bus: EventBus,
    emitter: flume::Sender<Event>,
}

impl Default for WorkflowEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowEngine {
    /// Engine over an empty document with the default (stdout) event bus.
    #[must_use]
    pub fn new() -> Self {
        Self::with_document_and_bus(Document::default(), EventBus::default())
    }

    /// Engine over an empty document with a caller-supplied bus.
    #[must_use]
    pub fn with_bus(event_bus: EventBus) -> Self {
        Self::with_document_and_bus(Document::default(), event_bus)
    }

    /// Engine over an existing document (e.g. one the persistence adapter
    /// just loaded and migrated).
    #[must_use]
    pub fn with_document(document: Document) -> Self {
        Self::with_document_and_bus(document, EventBus::default())
    }

    #[must_use]
    pub fn with_document_and_bus(document: Document, event_bus: EventBus) -> Self {
        let emitter = event_bus.sender();
        Self {
            document,
            event_bus,
            emitter,
        }
    }

    /// Apply one command and return the resulting document.
    ///
    /// Delegates to [`reducer::apply`]; afterwards emits a
    /// [`Event::command_applied`] on the bus. Unknown commands and unknown
    /// ids leave the document unchanged (see the reducer's no-op policy) but
    /// still produce an event, since observers may want to log them.
    pub fn apply(&mut self, command: Command) -> &Document {
        let kind = command.kind();
        let channel_id = command.channel_id().map(str::to_string);

        let current = std::mem::take(&mut self.document);
        self.document = reducer::apply(current, command);

        debug!(kind, channel = channel_id.as_deref(), "command applied");
        let _ = self
            .emitter
            .send(Event::command_applied(kind, channel_id));

        &self.document
    }

    /// Read-only view of the current document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Owned clone of the current document, e.g. for serialization or a
    /// disposable editing copy handed to a form.
    #[must_use]
    pub fn snapshot(&self) -> Document {
        self.document.clone()
    }

    /// The bus this engine emits on; register sinks here before calling
    /// [`EventBus::listen_for_events`].
    #[must_use]
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
