//! Error types for the DebateComps toolkit.
//!
//! Parsing and formatting never fail; only the I/O edges (configuration,
//! tournament files, the saved store, clipboard backends) produce these.

use thiserror::Error;

/// Errors that can occur at the I/O edges of the toolkit.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Clipboard backend '{backend}' failed: {reason}")]
    Clipboard { backend: String, reason: String },
}

impl From<serde_json::Error> for DirectoryError {
    fn from(err: serde_json::Error) -> Self {
        DirectoryError::Serialization(err.to_string())
    }
}

/// Result type alias for toolkit operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;
