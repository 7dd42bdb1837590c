use thiserror::Error;

use crate::api::FetchError;

/// Failure of a single asset download. Never crosses the bridge as-is: the
/// download service folds it into a `DownloadOutcome`.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Save dialog failed: {0}")]
    Dialog(#[from] DialogError),

    #[error("Failed to create file: {0}")]
    CreateFile(#[source] std::io::Error),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Write error: {0}")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct DialogError(pub String);

#[derive(Debug, Error)]
pub enum HotkeyError {
    #[error("Invalid hotkey '{binding}': {reason}")]
    InvalidBinding { binding: String, reason: String },

    #[error("Hotkey backend unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to register hotkey '{binding}': {reason}")]
    Registration { binding: String, reason: String },
}
