//! One-way progress reporting for long-running harvest runs.
//!
//! Frontends (popup, CLI wrapper, nothing at all) implement
//! [`ProgressSink`] to surface status text to users. Emission is
//! fire-and-forget: a sink with no listener is valid and reports are
//! never allowed to fail the run or block the loop.

use tracing::{error, info};

/// Severity attached to a progress message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral status text.
    Info,
    /// The reveal loop is actively scrolling.
    Scrolling,
    /// A run or export finished.
    Success,
    /// Something upstream should show as an error state.
    Error,
}

/// Receiver for `(text, severity)` progress pairs.
///
/// Reports arrive at run start, once per reveal-loop pass, at
/// extraction-complete, and at export-complete. Implementations must
/// not block; delivery is not ordered with respect to the next pass.
pub trait ProgressSink {
    /// Delivers one progress message. Failures are the sink's problem;
    /// there is no way to propagate them back into the run.
    fn report(&self, text: &str, severity: Severity);
}

/// A no-op progress sink for callers that do not surface status.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn report(&self, _text: &str, _severity: Severity) {}
}

/// Forwards progress text to the `tracing` subscriber.
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn report(&self, text: &str, severity: Severity) {
        match severity {
            Severity::Error => error!(target: "feedrake::progress", "{text}"),
            _ => info!(target: "feedrake::progress", "{text}"),
        }
    }
}
