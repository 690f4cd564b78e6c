//! # Studioflow: a deterministic video-production workflow engine
//!
//! Studioflow tracks a small content-production operation — channels own
//! candidate titles, titles become projects, projects carry uploaded files
//! and move through a render roster of simulated editors — as one document
//! driven by one pure reducer.
//!
//! ## Core concepts
//!
//! - **Document**: the entire application state, serialized as a single blob
//! - **Commands**: user intents, applied via `apply(document, command)`
//! - **Reducer**: pure, total, synchronous; unknown ids and unknown command
//!   types are silent no-ops
//! - **Engine**: explicit owner of the document with event-bus change
//!   notification
//! - **Session**: async adapter that loads, migrates, and saves the document
//!   around every command
//!
//! ## Quick start
//!
//! ```rust
//! use studioflow::command::Command;
//! use studioflow::document::Language;
//! use studioflow::engine::WorkflowEngine;
//! use studioflow::event_bus::EventBus;
//!
//! let mut engine = WorkflowEngine::with_bus(EventBus::quiet());
//!
//! engine.apply(Command::AddChannel {
//!     name: "True Stories".into(),
//!     niche: "History".into(),
//!     sub_niche: "WW2".into(),
//!     language: Language::English,
//! });
//!
//! let channel_id = engine.document().channels[0].id.clone();
//! engine.apply(Command::AddTitles {
//!     channel_id: channel_id.clone(),
//!     titles: vec!["The Lost Convoy".into(), "Shadow Harbor".into()],
//! });
//!
//! assert_eq!(engine.document().channels[0].titles.len(), 2);
//! ```
//!
//! ## Durable sessions
//!
//! ```rust,no_run
//! use studioflow::config::EngineConfig;
//! use studioflow::persistence::SqliteStore;
//! use studioflow::session::WorkflowSession;
//!
//! # async fn example() -> Result<(), studioflow::persistence::PersistenceError> {
//! let config = EngineConfig::from_env();
//! let url = config.database_url.as_deref().unwrap_or("sqlite://studioflow.db?mode=rwc");
//! let store = SqliteStore::connect(url).await?;
//! let mut session = WorkflowSession::open(store).await;
//! // session.dispatch(...) persists after every command
//! # Ok(())
//! # }
//! ```
//!
//! ## Module guide
//!
//! - [`document`] - The data model: channels, titles, projects, files, editors
//! - [`command`] - The command vocabulary and its wire format
//! - [`reducer`] - The pure state-transition function and assignment policy
//! - [`engine`] - The document-owning engine object
//! - [`session`] - Load/migrate/save lifecycle around the engine
//! - [`persistence`] - Blob stores (in-memory, SQLite)
//! - [`migrations`] - Idempotent shape migrations for older documents
//! - [`files`] - Data-URI file payload interchange
//! - [`event_bus`] - Change notification via pluggable sinks
//! - [`telemetry`] - Event formatting and tracing setup

pub mod command;
pub mod config;
pub mod document;
pub mod engine;
pub mod event_bus;
pub mod files;
pub mod migrations;
pub mod persistence;
pub mod reducer;
pub mod session;
pub mod telemetry;
pub mod utils;
