//! Centralized error types for ArchLens.

use thiserror::Error;

/// Main error type for ArchLens operations.
#[derive(Error, Debug)]
pub enum ArchLensError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for ArchLens operations.
pub type ArchLensResult<T> = Result<T, ArchLensError>;

impl ArchLensError {
    /// Create a storage error.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}
