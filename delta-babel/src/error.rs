//! Error type shared by every format.

use thiserror::Error;

/// Errors produced while parsing, serializing or looking up formats.
#[derive(Debug, Error)]
pub enum FormatError {
    /// No format registered under this name
    #[error("Format '{0}' not found")]
    FormatNotFound(String),

    /// The format exists but cannot go in the requested direction
    #[error("{0}")]
    NotSupported(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Malformed JSON input or output (missing `ops`, missing `type`, ...)
    #[error("Invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
}
