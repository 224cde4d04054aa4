//! Local storage error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing the persisted user record.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("Failed to {operation} '{}': {message}", path.display())]
    Io {
        operation: String,
        path: PathBuf,
        message: String,
    },

    /// The record could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// No platform data directory could be determined.
    #[error("Could not determine the data directory")]
    NoDataDirectory,

    /// Generic storage error (used by test doubles).
    #[error("Storage error: {0}")]
    Other(String),
}

impl StorageError {
    /// Build an I/O error for `operation` on `path`.
    pub fn io(operation: &str, path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        StorageError::Io {
            operation: operation.to_string(),
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            StorageError::Io { operation, .. } => {
                format!("Could not {} your settings.", operation)
            }
            StorageError::Serialization(_) => "Your saved settings are unreadable.".to_string(),
            StorageError::NoDataDirectory => {
                "Could not determine where to store your settings.".to_string()
            }
            StorageError::Other(message) => message.clone(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::Io { .. } => "E_STORE_IO",
            StorageError::Serialization(_) => "E_STORE_SERDE",
            StorageError::NoDataDirectory => "E_STORE_NODIR",
            StorageError::Other(_) => "E_STORE_OTHER",
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}
