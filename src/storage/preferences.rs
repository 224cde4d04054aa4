use std::sync::Arc;

use futures::stream::BoxStream;
use tokio::sync::Mutex;

use crate::error::StorageError;
use crate::flow::StateFlow;
use crate::models::{Account, ThemeConfig, UserData};
use crate::traits::UserDataStore;

/// Observable, persisted user preferences.
///
/// Setters are read-modify-write cycles serialized by one writer lock. The
/// new record is written to the store before it is published, so a failed
/// write leaves both the file and the observed value untouched.
pub struct UserPreferences {
    store: Arc<dyn UserDataStore>,
    state: StateFlow<UserData>,
    writer: Mutex<()>,
}

impl UserPreferences {
    /// Load the stored record, or defaults when nothing has been stored yet.
    ///
    /// An unreadable record (bad JSON) is logged and overwritten with
    /// defaults right away. I/O failures are returned.
    pub async fn open(store: Arc<dyn UserDataStore>) -> Result<Self, StorageError> {
        let initial = match store.read().await {
            Ok(Some(data)) => data,
            Ok(None) => UserData::default(),
            Err(StorageError::Serialization(message)) => {
                tracing::warn!(%message, "Stored preferences are unreadable, using defaults");
                let defaults = UserData::default();
                if let Err(err) = store.write(&defaults).await {
                    tracing::warn!(error = %err, "Could not replace unreadable preferences");
                }
                defaults
            }
            Err(err) => return Err(err),
        };

        Ok(Self {
            store,
            state: StateFlow::new(initial),
            writer: Mutex::new(()),
        })
    }

    /// Latest persisted record, replayed to each new subscriber.
    pub fn user_data(&self) -> BoxStream<'static, UserData> {
        self.state.stream()
    }

    pub fn current(&self) -> UserData {
        self.state.value()
    }

    /// Clear the login fields, keeping display preferences.
    pub async fn logout(&self) -> Result<UserData, StorageError> {
        self.modify(|data| *data = data.logged_out()).await
    }

    pub async fn set_theme_config(&self, theme: ThemeConfig) -> Result<UserData, StorageError> {
        self.modify(|data| data.theme_config = theme).await
    }

    pub async fn set_use_dynamic_color(&self, enabled: bool) -> Result<UserData, StorageError> {
        self.modify(|data| data.use_dynamic_color = enabled).await
    }

    /// Record a successful login.
    pub async fn set_logged_in(&self, account: &Account) -> Result<UserData, StorageError> {
        self.modify(|data| *data = data.logged_in(account)).await
    }

    async fn modify<F>(&self, f: F) -> Result<UserData, StorageError>
    where
        F: FnOnce(&mut UserData),
    {
        let _guard = self.writer.lock().await;

        let current = self.state.value();
        let mut next = current.clone();
        f(&mut next);
        if next == current {
            return Ok(next);
        }

        self.store.write(&next).await?;
        tracing::info!(
            logged_in = next.is_logged_in,
            theme = next.theme_config.label(),
            dynamic_color = next.use_dynamic_color,
            "Preferences saved"
        );
        self.state.set(next.clone());
        Ok(next)
    }
}

impl std::fmt::Debug for UserPreferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserPreferences")
            .field("current", &self.current())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemoryUserDataStore;
    use crate::adapters::FileUserDataStore;
    use futures::StreamExt;
    use std::time::Duration;
    use tempfile::TempDir;

    fn account() -> Account {
        Account {
            account_id: 7,
            session_id: "sess".to_string(),
            name: "Ada".to_string(),
            user_name: "ada".to_string(),
        }
    }

    async fn open(store: &InMemoryUserDataStore) -> UserPreferences {
        UserPreferences::open(Arc::new(store.clone())).await.unwrap()
    }

    #[tokio::test]
    async fn test_open_defaults_when_empty() {
        let prefs = open(&InMemoryUserDataStore::new()).await;
        assert_eq!(prefs.current(), UserData::default());
    }

    #[tokio::test]
    async fn test_open_read_failure() {
        let store = InMemoryUserDataStore::new();
        store.set_read_should_fail(true);
        assert!(UserPreferences::open(Arc::new(store)).await.is_err());
    }

    #[tokio::test]
    async fn test_set_theme_persists_then_publishes() {
        let store = InMemoryUserDataStore::new();
        let prefs = open(&store).await;
        let mut updates = prefs.user_data();
        assert_eq!(updates.next().await.unwrap().theme_config, ThemeConfig::FollowSystem);

        prefs.set_theme_config(ThemeConfig::Dark).await.unwrap();

        assert_eq!(store.data().unwrap().theme_config, ThemeConfig::Dark);
        assert_eq!(updates.next().await.unwrap().theme_config, ThemeConfig::Dark);
    }

    #[tokio::test]
    async fn test_failed_write_publishes_nothing() {
        let store = InMemoryUserDataStore::new();
        let prefs = open(&store).await;
        store.set_write_should_fail(true);

        assert!(prefs.set_use_dynamic_color(false).await.is_err());
        assert!(prefs.current().use_dynamic_color);
        assert!(store.data().is_none());
    }

    #[tokio::test]
    async fn test_unchanged_value_skips_write() {
        let store = InMemoryUserDataStore::new();
        let prefs = open(&store).await;

        prefs.set_use_dynamic_color(true).await.unwrap();
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_setters_both_apply() {
        let store = InMemoryUserDataStore::new();
        store.set_write_delay(Some(Duration::from_millis(20)));
        let prefs = Arc::new(open(&store).await);

        let a = {
            let prefs = prefs.clone();
            tokio::spawn(async move { prefs.set_theme_config(ThemeConfig::Light).await })
        };
        let b = {
            let prefs = prefs.clone();
            tokio::spawn(async move { prefs.set_use_dynamic_color(false).await })
        };
        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();

        let stored = store.data().unwrap();
        assert_eq!(stored.theme_config, ThemeConfig::Light);
        assert!(!stored.use_dynamic_color);
        assert_eq!(prefs.current(), stored);
    }

    #[tokio::test]
    async fn test_logout_keeps_display_preferences() {
        let store = InMemoryUserDataStore::new();
        let prefs = open(&store).await;
        prefs.set_theme_config(ThemeConfig::Dark).await.unwrap();
        prefs.set_use_dynamic_color(false).await.unwrap();
        prefs.set_logged_in(&account()).await.unwrap();
        assert!(prefs.current().is_logged_in);

        let data = prefs.logout().await.unwrap();
        assert!(!data.is_logged_in);
        assert_eq!(data.account_id, None);
        assert_eq!(data.session_id, None);
        assert_eq!(data.theme_config, ThemeConfig::Dark);
        assert!(!data.use_dynamic_color);
        assert_eq!(store.data(), Some(data));
    }

    #[tokio::test]
    async fn test_unreadable_record_is_replaced_on_open() {
        let dir = TempDir::new().unwrap();
        let store = FileUserDataStore::in_dir(dir.path());
        std::fs::write(store.path(), b"{ not json").unwrap();

        let prefs = UserPreferences::open(Arc::new(store.clone())).await.unwrap();
        // same value as the default, so no write happens here
        prefs.set_theme_config(ThemeConfig::FollowSystem).await.unwrap();

        assert_eq!(store.read().await.unwrap(), Some(UserData::default()));
    }
}
