//! Typed error taxonomy for the sync pipeline.
//!
//! Every stage of a sync run fails with a [`SyncError`] variant, so the
//! caller can tell "nothing to do" apart from a real failure. The CLI
//! boundary wraps these in `anyhow` for display; nothing in the library
//! panics on a failed run.

use thiserror::Error;

/// Failure of a single sync run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A required credential field is missing from the configuration.
    #[error("config incomplete: missing {0}")]
    ConfigIncomplete(&'static str),

    /// Session authentication failed (network, HTTP status, or a
    /// malformed response without a token).
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Generic network, timeout, or HTTP-status failure on any call.
    #[error("transport error: {0}")]
    Transport(String),

    /// The note text does not contain a parseable title/metadata layout.
    #[error("malformed note text: {0}")]
    Format(String),

    /// The clear step could not locate the metadata boundary in the
    /// raw note text.
    #[error("cannot find metadata boundary in note text")]
    Boundary,

    /// No note (or required container) matched the configured path.
    #[error("note not found: {0}")]
    NotFound(String),
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        SyncError::Transport(err.to_string())
    }
}
