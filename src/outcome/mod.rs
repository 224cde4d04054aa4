//! The two-variant result type returned by every repository call.
//!
//! An [`Outcome`] is produced once per request attempt and is either a
//! `Success` carrying the mapped domain value or a [`Failure`] carrying a
//! display message, an integer code (the HTTP status when there is one,
//! `-1` otherwise) and the original cause.
//!
//! # Example
//!
//! ```ignore
//! use cinescope::outcome::Outcome;
//!
//! match repo.movie_details(550).await {
//!     Outcome::Success(details) => println!("{}", details.title),
//!     Outcome::Failure(failure) => eprintln!("{}", failure.error_response),
//! }
//! ```

mod stream;

pub use stream::OutcomeStreamExt;

use std::fmt;
use std::sync::Arc;

use crate::error::{AppError, UNKNOWN_ERROR_CODE};

/// Error cause carried by a failure.
pub type FailureCause = Arc<dyn std::error::Error + Send + Sync>;

/// The failing side of an [`Outcome`].
#[derive(Debug, Clone)]
pub struct Failure {
    /// Human-readable message suitable for the UI.
    pub error_response: String,
    /// HTTP status code, or `-1` when the failure had none.
    pub error_code: i32,
    /// The error that caused this failure, if known.
    pub cause: Option<FailureCause>,
}

impl Failure {
    /// Create a failure with the default error code.
    pub fn new(error_response: impl Into<String>) -> Self {
        Self {
            error_response: error_response.into(),
            error_code: UNKNOWN_ERROR_CODE,
            cause: None,
        }
    }

    /// Set the error code.
    pub fn with_code(mut self, code: i32) -> Self {
        self.error_code = code;
        self
    }

    /// Attach the underlying cause.
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause));
        self
    }
}

impl PartialEq for Failure {
    // Causes are not comparable; two failures are equal when they would
    // render the same to the user.
    fn eq(&self, other: &Self) -> bool {
        self.error_response == other.error_response && self.error_code == other.error_code
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.error_code == UNKNOWN_ERROR_CODE {
            write!(f, "{}", self.error_response)
        } else {
            write!(f, "{} (code {})", self.error_response, self.error_code)
        }
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<AppError> for Failure {
    fn from(err: AppError) -> Self {
        Failure {
            error_response: err.user_message(),
            error_code: err.status_code(),
            cause: Some(Arc::new(err)),
        }
    }
}

/// Result of a single repository request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The request succeeded.
    Success(T),
    /// The request failed.
    Failure(Failure),
}

impl<T> Outcome<T> {
    /// Build a failure outcome from anything convertible to [`AppError`].
    pub fn failure(err: impl Into<AppError>) -> Self {
        Outcome::Failure(Failure::from(err.into()))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Borrow the success payload.
    pub fn success(&self) -> Option<&T> {
        match self {
            Outcome::Success(data) => Some(data),
            Outcome::Failure(_) => None,
        }
    }

    /// Borrow the failure.
    pub fn as_failure(&self) -> Option<&Failure> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure),
        }
    }

    /// Consume into the success payload, discarding a failure.
    pub fn into_success(self) -> Option<T> {
        match self {
            Outcome::Success(data) => Some(data),
            Outcome::Failure(_) => None,
        }
    }

    /// Map the success payload.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(data) => Outcome::Success(f(data)),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Map a success into another outcome; failures pass through.
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Outcome::Success(data) => f(data),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Map the failure, keeping a success untouched.
    pub fn map_failure<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(Failure) -> Failure,
    {
        match self {
            Outcome::Success(data) => Outcome::Success(data),
            Outcome::Failure(failure) => Outcome::Failure(f(failure)),
        }
    }

    /// Run `f` on a success payload and return the outcome unchanged.
    pub fn on_success<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Success(data) = &self {
            f(data);
        }
        self
    }

    /// Run `f` on a failure and return the outcome unchanged.
    pub fn on_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&Failure),
    {
        if let Outcome::Failure(failure) = &self {
            f(failure);
        }
        self
    }

    /// Convert into a standard `Result`.
    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Outcome::Success(data) => Ok(data),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<AppError>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Outcome::Success(data),
            Err(err) => Outcome::failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;
    use std::cell::Cell;

    fn not_found() -> Outcome<u32> {
        Outcome::failure(NetworkError::HttpStatus {
            status: 404,
            message: "not found".to_string(),
        })
    }

    #[test]
    fn test_failure_defaults() {
        let failure = Failure::new("boom");
        assert_eq!(failure.error_code, -1);
        assert!(failure.cause.is_none());
        assert_eq!(failure.to_string(), "boom");
    }

    #[test]
    fn test_failure_builders() {
        let failure = Failure::new("gone")
            .with_code(410)
            .with_cause(NetworkError::Cancelled);
        assert_eq!(failure.error_code, 410);
        assert!(failure.cause.is_some());
        assert_eq!(failure.to_string(), "gone (code 410)");
    }

    #[test]
    fn test_failure_from_app_error_keeps_status_and_cause() {
        let outcome = not_found();
        let failure = outcome.as_failure().unwrap();
        assert_eq!(failure.error_code, 404);
        let cause = failure.cause.as_ref().unwrap();
        assert!(cause.to_string().contains("404"));
    }

    #[test]
    fn test_exactly_one_variant() {
        let ok: Outcome<u32> = Outcome::Success(1);
        assert!(ok.is_success() && !ok.is_failure());
        let err = not_found();
        assert!(err.is_failure() && !err.is_success());
    }

    #[test]
    fn test_map_and_then() {
        let doubled = Outcome::Success(21).map(|v| v * 2);
        assert_eq!(doubled, Outcome::Success(42));

        let chained = Outcome::Success(2).and_then(|v| {
            if v > 1 {
                Outcome::Success(format!("{} titles", v))
            } else {
                Outcome::Failure(Failure::new("too few"))
            }
        });
        assert_eq!(chained, Outcome::Success("2 titles".to_string()));

        let passthrough = not_found().map(|v| v + 1);
        assert_eq!(passthrough.as_failure().unwrap().error_code, 404);
    }

    #[test]
    fn test_callbacks_do_not_alter_outcome() {
        let seen = Cell::new(0);
        let outcome = Outcome::Success(7)
            .on_success(|v| seen.set(*v))
            .on_failure(|_| seen.set(-1));
        assert_eq!(seen.get(), 7);
        assert_eq!(outcome, Outcome::Success(7));

        let failed = not_found().on_failure(|f| seen.set(f.error_code));
        assert_eq!(seen.get(), 404);
        assert!(failed.is_failure());
    }

    #[test]
    fn test_from_result() {
        let ok: Outcome<u8> = Result::<u8, NetworkError>::Ok(3).into();
        assert_eq!(ok.into_result().unwrap(), 3);

        let err: Outcome<u8> = Result::<u8, NetworkError>::Err(NetworkError::Cancelled).into();
        assert_eq!(err.into_result().unwrap_err().error_code, -1);
    }

    #[test]
    fn test_map_failure() {
        let relabeled = not_found().map_failure(|f| Failure {
            error_response: "Movie not found".to_string(),
            ..f
        });
        let failure = relabeled.as_failure().unwrap();
        assert_eq!(failure.error_response, "Movie not found");
        assert_eq!(failure.error_code, 404);
    }
}
