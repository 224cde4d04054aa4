//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileUserDataStore`] - File-based preference storage
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for all adapters:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::InMemoryUserDataStore`] - In-memory preference storage

pub mod file_store;
pub mod mock;
pub mod reqwest_http;

pub use file_store::FileUserDataStore;
pub use mock::{InMemoryUserDataStore, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
