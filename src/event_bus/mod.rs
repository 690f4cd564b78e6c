//! Change-notification plumbing for the workflow engine.
//!
//! The engine emits one [`Event`] per applied command; an [`EventBus`] fans
//! events out to any number of [`EventSink`]s (stdout, in-memory capture,
//! channels feeding a UI). This replaces the ambient "global document +
//! subscriber re-render" pattern with an explicit observer list.

pub mod bus;
pub mod event;
pub mod sink;

pub use bus::EventBus;
pub use event::{CommandEvent, DiagnosticEvent, Event, PersistenceEvent};
pub use sink::{ChannelSink, EventSink, MemorySink, StdOutSink};
