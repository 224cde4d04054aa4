use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::task::{AbortHandle, JoinSet};

/// Owner of the background work started by one view-model.
///
/// Dropping the scope aborts every task still running on it, so a torn-down
/// screen receives no further state updates.
#[derive(Debug, Default)]
pub struct ViewModelScope {
    tasks: Mutex<JoinSet<()>>,
}

impl ViewModelScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `future` on the current runtime until it finishes or the scope is
    /// dropped.
    pub fn spawn<F>(&self, future: F) -> AbortHandle
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut tasks = self.tasks();
        // reap finished tasks so the set does not grow without bound
        while tasks.try_join_next().is_some() {}
        tasks.spawn(future)
    }

    /// Abort every running task.
    pub fn cancel(&self) {
        self.tasks().abort_all();
    }

    /// Number of tasks not yet reaped.
    pub fn len(&self) -> usize {
        self.tasks().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn tasks(&self) -> MutexGuard<'_, JoinSet<()>> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
