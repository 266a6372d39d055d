//! Error types for interchange operations.

use thiserror::Error;

/// Errors that can occur while reading or writing a structural model.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(String),

    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No format handles the given file extension.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A deserialized model violates a structural invariant.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl InterchangeError {
    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// Create a YAML error.
    pub fn yaml(message: impl Into<String>) -> Self {
        Self::Yaml(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
