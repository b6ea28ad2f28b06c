//! Error types for the relay core.
//!
//! [`RelayError`] is the error the router's hook sees; [`HandlerError`] describes why a handler
//! declined an event.

use thiserror::Error;

/// Top-level error (bot transport, file transfer, IO).
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Download error: {0}")]
    Download(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a handler declined an event (rejected file, missing name, unknown callback payload).
/// Handlers answer these themselves; they never reach the router's error hook.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HandlerError {
    #[error("Unsupported file: {0}")]
    UnsupportedFile(String),

    #[error("Document has no file name")]
    MissingFileName,

    #[error("Invalid callback payload: {0}")]
    InvalidPayload(String),
}

/// Result type for core operations; uses [`RelayError`].
pub type Result<T> = std::result::Result<T, RelayError>;
