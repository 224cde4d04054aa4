use std::sync::Arc;

use super::into_outcome;
use crate::api::TmdbClient;
use crate::error::AppResult;
use crate::models::UserData;
use crate::outcome::Outcome;
use crate::storage::UserPreferences;

/// Account login and logout.
#[derive(Debug, Clone)]
pub struct AuthRepository {
    client: Arc<TmdbClient>,
    preferences: Arc<UserPreferences>,
}

impl AuthRepository {
    pub fn new(client: Arc<TmdbClient>, preferences: Arc<UserPreferences>) -> Self {
        Self {
            client,
            preferences,
        }
    }

    /// Log in with account credentials and persist the session.
    ///
    /// Runs request token, validate, session and account calls in order; the
    /// first failure ends the chain and becomes the outcome.
    pub async fn login(&self, username: &str, password: &str) -> Outcome<UserData> {
        into_outcome("login", self.login_chain(username, password).await)
    }

    async fn login_chain(&self, username: &str, password: &str) -> AppResult<UserData> {
        let token = self.client.create_request_token().await?;
        let validated = self
            .client
            .validate_with_login(username, password, &token.request_token)
            .await?;
        let session = self.client.create_session(&validated.request_token).await?;
        let account = self
            .client
            .account(&session.session_id)
            .await?
            .into_account(session.session_id);

        let data = self.preferences.set_logged_in(&account).await?;
        tracing::info!(account_id = account.account_id, "Logged in");
        Ok(data)
    }

    /// End the session.
    ///
    /// The remote session delete is best effort; the local record is logged
    /// out either way.
    pub async fn logout(&self) -> Outcome<UserData> {
        if let Some(session_id) = self.preferences.current().session_id {
            if let Err(err) = self.client.delete_session(&session_id).await {
                tracing::warn!(error = %err, "Failed to delete remote session");
            }
        }

        let result = self.preferences.logout().await.map_err(Into::into);
        if result.is_ok() {
            tracing::info!("Logged out");
        }
        into_outcome("logout", result)
    }
}
