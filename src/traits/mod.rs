//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST, DELETE)
//! - [`UserDataStore`] - Durable storage of the user preference record

pub mod http;
pub mod store;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use store::UserDataStore;
