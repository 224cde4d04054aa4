//! Remote data source for the movie database API.
//!
//! [`TmdbClient`] speaks the wire format ([`dto`]); [`mapping`] turns those
//! shapes into the domain models the rest of the crate uses.

mod client;
pub mod dto;
mod interceptor;
pub mod mapping;

pub use client::TmdbClient;
pub use interceptor::AuthInterceptor;
pub use mapping::{ImageUrls, IntoDomain};
