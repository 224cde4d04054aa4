//! In-memory user data store for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::StorageError;
use crate::models::UserData;
use crate::traits::UserDataStore;

/// In-memory [`UserDataStore`] with failure injection.
///
/// Clones share the same record, so a test can keep a handle and inspect
/// what the code under test persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDataStore {
    /// Stored record
    data: Arc<Mutex<Option<UserData>>>,
    /// Whether write should fail
    write_should_fail: Arc<Mutex<bool>>,
    /// Whether read should fail
    read_should_fail: Arc<Mutex<bool>>,
    /// Artificial latency applied to each write
    write_delay: Arc<Mutex<Option<Duration>>>,
    /// Number of successful writes
    writes: Arc<Mutex<usize>>,
}

impl InMemoryUserDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding an initial record.
    pub fn with_data(data: UserData) -> Self {
        let store = Self::default();
        store.set_data(Some(data));
        store
    }

    pub fn set_write_should_fail(&self, should_fail: bool) {
        *self.write_should_fail.lock().unwrap() = should_fail;
    }

    pub fn set_read_should_fail(&self, should_fail: bool) {
        *self.read_should_fail.lock().unwrap() = should_fail;
    }

    /// Delay every write, widening the window for interleaving writers.
    pub fn set_write_delay(&self, delay: Option<Duration>) {
        *self.write_delay.lock().unwrap() = delay;
    }

    /// Get the stored record synchronously.
    pub fn data(&self) -> Option<UserData> {
        self.data.lock().unwrap().clone()
    }

    /// Replace the stored record synchronously.
    pub fn set_data(&self, data: Option<UserData>) {
        *self.data.lock().unwrap() = data;
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

#[async_trait]
impl UserDataStore for InMemoryUserDataStore {
    async fn read(&self) -> Result<Option<UserData>, StorageError> {
        if *self.read_should_fail.lock().unwrap() {
            return Err(StorageError::Other("Mock read failure".to_string()));
        }
        Ok(self.data())
    }

    async fn write(&self, data: &UserData) -> Result<(), StorageError> {
        let delay = *self.write_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if *self.write_should_fail.lock().unwrap() {
            return Err(StorageError::Other("Mock write failure".to_string()));
        }
        self.set_data(Some(data.clone()));
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}
