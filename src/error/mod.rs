//! Error handling for cinescope.
//!
//! Errors are classified close to where they happen ([`NetworkError`],
//! [`StorageError`]), unified in [`AppError`], and then folded into an
//! [`Outcome`](crate::outcome::Outcome) failure at the repository boundary.
//! Nothing past a repository sees these types except as the optional cause of
//! a [`Failure`](crate::outcome::Failure).

mod app_error;
mod network;
mod storage;

pub use app_error::{AppError, UNKNOWN_ERROR_CODE};
pub use network::NetworkError;
pub use storage::StorageError;

/// Type alias for Results using AppError.
pub type AppResult<T> = Result<T, AppError>;
