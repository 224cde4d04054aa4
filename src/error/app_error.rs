//! Unified error type for cinescope.
//!
//! Repositories collapse every failure into [`AppError`] before turning it
//! into an [`Outcome::Failure`](crate::outcome::Outcome). The only machine
//! readable detail that survives the boundary is [`AppError::status_code`].

use std::fmt;

use super::network::NetworkError;
use super::storage::StorageError;

/// Code used when a failure has no HTTP status.
pub const UNKNOWN_ERROR_CODE: i32 = -1;

/// Unified error type.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Transport, HTTP status or decoding errors.
    Network(NetworkError),

    /// Local storage I/O or serialization errors.
    Storage(StorageError),
}

impl AppError {
    /// HTTP status for status errors, [`UNKNOWN_ERROR_CODE`] otherwise.
    pub fn status_code(&self) -> i32 {
        match self {
            AppError::Network(err) => err
                .status()
                .map(i32::from)
                .unwrap_or(UNKNOWN_ERROR_CODE),
            AppError::Storage(_) => UNKNOWN_ERROR_CODE,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(err) => err.user_message(),
            AppError::Storage(err) => err.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Network(err) => err.error_code(),
            AppError::Storage(err) => err.error_code(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(err) => write!(f, "{}", err),
            AppError::Storage(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(err) => Some(err),
            AppError::Storage(err) => Some(err),
        }
    }
}

impl From<NetworkError> for AppError {
    fn from(err: NetworkError) -> Self {
        AppError::Network(err)
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Storage(err)
    }
}

impl From<crate::traits::HttpError> for AppError {
    fn from(err: crate::traits::HttpError) -> Self {
        AppError::Network(err.into())
    }
}
