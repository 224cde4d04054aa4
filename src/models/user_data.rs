//! The persisted user preference record.

use serde::{Deserialize, Serialize};

/// Theme selection.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ThemeConfig {
    #[default]
    FollowSystem,
    Light,
    Dark,
}

impl ThemeConfig {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "system" | "follow_system" | "follow-system" => Some(ThemeConfig::FollowSystem),
            "light" => Some(ThemeConfig::Light),
            "dark" => Some(ThemeConfig::Dark),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeConfig::FollowSystem => "system",
            ThemeConfig::Light => "light",
            ThemeConfig::Dark => "dark",
        }
    }
}

/// Account returned by the API after a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub account_id: u64,
    pub session_id: String,
    pub name: String,
    pub user_name: String,
}

/// User preferences and login state.
///
/// There is exactly one record per installation. Fields missing from an
/// older file fall back to their defaults and unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserData {
    pub account_id: Option<u64>,
    pub is_logged_in: bool,
    pub theme_config: ThemeConfig,
    pub use_dynamic_color: bool,
    pub name: String,
    pub user_name: String,
    /// API session for authenticated account calls.
    pub session_id: Option<String>,
}

impl Default for UserData {
    fn default() -> Self {
        Self {
            account_id: None,
            is_logged_in: false,
            theme_config: ThemeConfig::FollowSystem,
            use_dynamic_color: true,
            name: String::new(),
            user_name: String::new(),
            session_id: None,
        }
    }
}

impl UserData {
    /// Copy of this record with the login fields cleared.
    ///
    /// Display preferences are kept.
    pub fn logged_out(&self) -> Self {
        Self {
            account_id: None,
            is_logged_in: false,
            name: String::new(),
            user_name: String::new(),
            session_id: None,
            ..self.clone()
        }
    }

    /// Copy of this record logged in as `account`.
    pub fn logged_in(&self, account: &Account) -> Self {
        Self {
            account_id: Some(account.account_id),
            is_logged_in: true,
            name: account.name.clone(),
            user_name: account.user_name.clone(),
            session_id: Some(account.session_id.clone()),
            ..self.clone()
        }
    }

    /// Name to greet the user with.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.user_name
        } else {
            &self.name
        }
    }
}
