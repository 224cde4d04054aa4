//! Runtime configuration.
//!
//! Base URLs and the API token are injected, never hard-coded into the
//! client. Use the builder methods or [`ApiConfig::from_env`].

use std::path::PathBuf;
use std::time::Duration;

use crate::error::StorageError;

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "https://api.themoviedb.org/3";

/// Default base URL prepended to image paths.
pub const DEFAULT_IMAGE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Environment variable holding the API bearer token.
pub const ENV_API_TOKEN: &str = "CINESCOPE_API_TOKEN";
pub const ENV_API_URL: &str = "CINESCOPE_API_URL";
pub const ENV_IMAGE_URL: &str = "CINESCOPE_IMAGE_URL";
pub const ENV_TIMEOUT_SECS: &str = "CINESCOPE_TIMEOUT_SECS";
pub const ENV_DATA_DIR: &str = "CINESCOPE_DATA_DIR";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// API client configuration.
///
/// # Example
///
/// ```ignore
/// use cinescope::config::ApiConfig;
///
/// let config = ApiConfig::new("my-token")
///     .with_base_url("http://localhost:8080/3")
///     .with_timeout_secs(10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL for API requests, without a trailing slash
    pub base_url: String,
    /// Base URL prepended to image paths
    pub image_base_url: String,
    /// Bearer token sent on authenticated requests
    pub access_token: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Create a config with default URLs for the given token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_URL.to_string(),
            access_token: access_token.into(),
            timeout_secs: 30,
        }
    }

    /// Set the API base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the image base URL.
    pub fn with_image_base_url(mut self, url: impl Into<String>) -> Self {
        self.image_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build the config from `CINESCOPE_*` environment variables.
    ///
    /// `CINESCOPE_API_TOKEN` is required; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = std::env::var(ENV_API_TOKEN)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::Missing(ENV_API_TOKEN))?;

        let mut config = Self::new(token.trim());
        if let Ok(url) = std::env::var(ENV_API_URL) {
            config = config.with_base_url(url);
        }
        if let Ok(url) = std::env::var(ENV_IMAGE_URL) {
            config = config.with_image_base_url(url);
        }
        if let Ok(value) = std::env::var(ENV_TIMEOUT_SECS) {
            let secs = value.parse().map_err(|_| ConfigError::Invalid {
                name: ENV_TIMEOUT_SECS,
                value: value.clone(),
            })?;
            config = config.with_timeout_secs(secs);
        }
        Ok(config)
    }
}

/// Where the preference file lives.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageConfig {
    /// Directory holding the preference file
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Use `CINESCOPE_DATA_DIR` when set, else the platform data directory.
    pub fn from_env() -> Result<Self, StorageError> {
        if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
            return Ok(Self {
                data_dir: PathBuf::from(dir),
            });
        }
        let base = dirs::data_dir().ok_or(StorageError::NoDataDirectory)?;
        Ok(Self {
            data_dir: base.join("cinescope"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [
            ENV_API_TOKEN,
            ENV_API_URL,
            ENV_IMAGE_URL,
            ENV_TIMEOUT_SECS,
            ENV_DATA_DIR,
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_builder() {
        let config = ApiConfig::new("token")
            .with_base_url("http://localhost:8080/3/")
            .with_image_base_url("http://img.local/")
            .with_timeout_secs(5);
        assert_eq!(config.base_url, "http://localhost:8080/3");
        assert_eq!(config.image_base_url, "http://img.local");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    #[serial]
    fn test_from_env_requires_token() {
        clear_env();
        assert_eq!(ApiConfig::from_env(), Err(ConfigError::Missing(ENV_API_TOKEN)));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var(ENV_API_TOKEN, "abc");
        std::env::set_var(ENV_API_URL, "http://127.0.0.1:9000");
        std::env::set_var(ENV_TIMEOUT_SECS, "7");

        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.access_token, "abc");
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.image_base_url, DEFAULT_IMAGE_URL);
        assert_eq!(config.timeout_secs, 7);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout() {
        clear_env();
        std::env::set_var(ENV_API_TOKEN, "abc");
        std::env::set_var(ENV_TIMEOUT_SECS, "soon");
        assert!(matches!(
            ApiConfig::from_env(),
            Err(ConfigError::Invalid { .. })
        ));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_storage_config_override() {
        clear_env();
        std::env::set_var(ENV_DATA_DIR, "/tmp/cinescope-test");
        let config = StorageConfig::from_env().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/cinescope-test"));
        clear_env();
    }
}
