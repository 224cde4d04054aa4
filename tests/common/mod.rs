//! Common test utilities for integration tests.
//!
//! Fixtures here build API payloads and wire a [`TmdbClient`] to a wiremock
//! server, so tests exercise the real reqwest adapter end to end.
//!
//! # Example
//!
//! ```ignore
//! let server = MockServer::start().await;
//! let client = client_for(&server);
//! ```

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

use std::sync::Arc;

use cinescope::adapters::{FileUserDataStore, InMemoryUserDataStore, ReqwestHttpClient};
use cinescope::api::TmdbClient;
use cinescope::cli::AppContext;
use cinescope::config::ApiConfig;
use cinescope::storage::UserPreferences;
use wiremock::MockServer;

/// Token the clients under test send.
pub const TEST_TOKEN: &str = "test-access-token";

/// Image base the clients under test resolve paths against.
pub const TEST_IMAGE_BASE: &str = "https://img.test/w500";

/// Config pointing at the mock server.
pub fn config_for(server: &MockServer) -> ApiConfig {
    ApiConfig::new(TEST_TOKEN)
        .with_base_url(server.uri())
        .with_image_base_url(TEST_IMAGE_BASE)
        .with_timeout_secs(5)
}

/// Client talking to the mock server over real HTTP.
pub fn client_for(server: &MockServer) -> Arc<TmdbClient> {
    Arc::new(TmdbClient::new(
        Arc::new(ReqwestHttpClient::new()),
        &config_for(server),
    ))
}

/// Preferences backed by memory.
pub async fn memory_preferences() -> (Arc<UserPreferences>, InMemoryUserDataStore) {
    let store = InMemoryUserDataStore::new();
    let prefs = UserPreferences::open(Arc::new(store.clone()))
        .await
        .expect("open in-memory preferences");
    (Arc::new(prefs), store)
}

/// Preferences backed by a file in `dir`.
pub async fn file_preferences(dir: &std::path::Path) -> Arc<UserPreferences> {
    let prefs = UserPreferences::open(Arc::new(FileUserDataStore::in_dir(dir)))
        .await
        .expect("open file preferences");
    Arc::new(prefs)
}

/// Full context against the mock server with in-memory preferences.
pub async fn context_for(server: &MockServer) -> AppContext {
    let (prefs, _) = memory_preferences().await;
    AppContext::from_parts(client_for(server), prefs)
}
