//! Rendering and logging setup shared by sinks and binaries.
//!
//! [`PlainFormatter`] turns [`Event`]s into one-line human output with
//! optional ANSI color (auto-detected from the terminal), and
//! [`init_tracing`] wires up the `tracing` subscriber stack used across the
//! crate.

use std::io::IsTerminal;

use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::event_bus::Event;

const SCOPE_COLOR: &str = "\x1b[32m"; // green
const RESET_COLOR: &str = "\x1b[0m";

/// Controls whether formatted output carries ANSI color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatterMode {
    /// Detect TTY capability (checks stderr) on each render.
    #[default]
    Auto,
    /// Always include color codes.
    Colored,
    /// Never include color codes, for logs and files.
    Plain,
}

impl FormatterMode {
    /// Resolve `Auto` against the current stderr TTY status.
    #[must_use]
    pub fn is_colored(&self) -> bool {
        match self {
            FormatterMode::Auto => std::io::stderr().is_terminal(),
            FormatterMode::Colored => true,
            FormatterMode::Plain => false,
        }
    }
}

/// Renders events for a sink. Implementations must be cheap: the bus calls
/// this once per event per sink.
pub trait TelemetryFormatter: Send + Sync {
    fn render_event(&self, event: &Event) -> String;
}

/// Default single-line formatter: `[scope] message`, scope colored when the
/// mode allows.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter {
    mode: FormatterMode,
}

impl PlainFormatter {
    #[must_use]
    pub fn with_mode(mode: FormatterMode) -> Self {
        Self { mode }
    }
}

impl TelemetryFormatter for PlainFormatter {
    fn render_event(&self, event: &Event) -> String {
        let scope = event.scope_label();
        if self.mode.is_colored() {
            format!("{SCOPE_COLOR}[{scope}]{RESET_COLOR} {}", event.message())
        } else {
            format!("[{scope}] {}", event.message())
        }
    }
}

/// Install the crate's tracing subscriber: env-filter (`RUST_LOG`, default
/// `info`), fmt layer, and an [`ErrorLayer`] so spans are captured alongside
/// errors.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(ErrorLayer::default())
        .try_init();
}
