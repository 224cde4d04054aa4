use std::sync::Arc;

use futures::stream::BoxStream;

use super::into_outcome;
use crate::models::{ThemeConfig, UserData};
use crate::outcome::Outcome;
use crate::storage::UserPreferences;

/// Preferences and login state held in local storage.
#[derive(Debug, Clone)]
pub struct UserDataRepository {
    preferences: Arc<UserPreferences>,
}

impl UserDataRepository {
    pub fn new(preferences: Arc<UserPreferences>) -> Self {
        Self { preferences }
    }

    /// The persisted record, replaying the latest value to new subscribers.
    pub fn user_data(&self) -> BoxStream<'static, UserData> {
        self.preferences.user_data()
    }

    pub async fn set_theme_config(&self, theme: ThemeConfig) -> Outcome<()> {
        let result = self.preferences.set_theme_config(theme).await;
        into_outcome("set_theme_config", result.map(|_| ()).map_err(Into::into))
    }

    pub async fn set_use_dynamic_color(&self, enabled: bool) -> Outcome<()> {
        let result = self.preferences.set_use_dynamic_color(enabled).await;
        into_outcome("set_use_dynamic_color", result.map(|_| ()).map_err(Into::into))
    }

    /// Local logout only; see [`AuthRepository::logout`](super::AuthRepository::logout)
    /// for ending the remote session too.
    pub async fn logout(&self) -> Outcome<()> {
        let result = self.preferences.logout().await;
        into_outcome("logout", result.map(|_| ()).map_err(Into::into))
    }
}
