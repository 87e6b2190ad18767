//! Error types for feedrake.
//!
//! The reveal loop itself has no error exit: missing elements and
//! unparsable counters degrade to defaults, and both termination causes
//! (exhaustion, iteration cap) are the same success path. The only
//! fallible operations are on the export side.

/// Error type for export operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// JSON serialization of the result sequence failed.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The file sink failed to persist an exported document.
    #[error("file save failed: {0}")]
    Save(#[from] std::io::Error),
}

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, Error>;
