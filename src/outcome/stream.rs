//! Stream operators over [`Outcome`] emissions.

use futures::future;
use futures::{Stream, StreamExt};

use super::{Failure, Outcome};

/// Operators for streams of outcomes.
///
/// None of these retry: a failure is delivered once and the stream moves on.
pub trait OutcomeStreamExt<T>: Stream<Item = Outcome<T>> + Sized {
    /// Keep only success payloads.
    fn successes(self) -> impl Stream<Item = T> {
        self.filter_map(|outcome| future::ready(outcome.into_success()))
    }

    /// Map each success payload.
    fn map_success<U, F>(self, mut f: F) -> impl Stream<Item = Outcome<U>>
    where
        F: FnMut(T) -> U,
    {
        self.map(move |outcome| outcome.map(&mut f))
    }

    /// Map each whole outcome to an outcome of another type.
    fn map_outcome<U, F>(self, f: F) -> impl Stream<Item = Outcome<U>>
    where
        F: FnMut(Outcome<T>) -> Outcome<U>,
    {
        self.map(f)
    }

    /// Observe successes without changing the stream.
    fn on_success<F>(self, mut f: F) -> impl Stream<Item = Outcome<T>>
    where
        F: FnMut(&T),
    {
        self.inspect(move |outcome| {
            if let Outcome::Success(data) = outcome {
                f(data);
            }
        })
    }

    /// Observe failures without changing the stream.
    fn on_failure<F>(self, mut f: F) -> impl Stream<Item = Outcome<T>>
    where
        F: FnMut(&Failure),
    {
        self.inspect(move |outcome| {
            if let Outcome::Failure(failure) = outcome {
                f(failure);
            }
        })
    }
}

impl<T, S> OutcomeStreamExt<T> for S where S: Stream<Item = Outcome<T>> + Sized {}
