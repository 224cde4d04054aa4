//! Repositories: the boundary where errors become [`Outcome`] values.
//!
//! Each repository method performs one data-source operation and returns
//! exactly one outcome. Failures are logged here and nowhere else.

mod auth;
mod movie_details;
mod movies;
mod people;
mod people_details;
mod tv_shows;
mod user_data;

pub use auth::AuthRepository;
pub use movie_details::MovieDetailsRepository;
pub use movies::MoviesRepository;
pub use people::PeopleRepository;
pub use people_details::PeopleDetailsRepository;
pub use tv_shows::TvShowsRepository;
pub use user_data::UserDataRepository;

use std::future::Future;

use futures::stream::{self, BoxStream, StreamExt};

use crate::error::AppResult;
use crate::outcome::Outcome;

/// Fold a data-source result into an outcome, logging the failure.
pub(crate) fn into_outcome<T>(operation: &'static str, result: AppResult<T>) -> Outcome<T> {
    match result {
        Ok(value) => Outcome::Success(value),
        Err(err) => {
            tracing::warn!(
                operation,
                code = err.error_code(),
                status = err.status_code(),
                error = %err,
                "Request failed"
            );
            Outcome::failure(err)
        }
    }
}

/// A stream that runs `fut` when first polled and emits its outcome once.
pub(crate) fn single<T, F>(fut: F) -> BoxStream<'static, Outcome<T>>
where
    T: Send + 'static,
    F: Future<Output = Outcome<T>> + Send + 'static,
{
    stream::once(fut).boxed()
}
