//! Persistence seam for the user preference record.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::UserData;

/// Durable storage for the single [`UserData`] record.
///
/// Implementations must replace the whole record atomically on `write`: a
/// reader either sees the previous record or the new one, never a mix.
/// Serializing writers is the caller's job (see
/// [`UserPreferences`](crate::storage::UserPreferences)).
#[async_trait]
pub trait UserDataStore: Send + Sync {
    /// Read the stored record.
    ///
    /// Returns `Ok(None)` when nothing has been written yet.
    async fn read(&self) -> Result<Option<UserData>, StorageError>;

    /// Replace the stored record.
    async fn write(&self, data: &UserData) -> Result<(), StorageError>;
}
