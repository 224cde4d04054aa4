//! Cinescope - a movie and TV catalogue client
//!
//! Layers, from the wire up:
//!
//! - [`api`] talks to the catalogue HTTP API and maps DTOs to [`models`]
//! - [`repository`] wraps every call in an [`outcome::Outcome`]
//! - [`paging`] turns page-numbered endpoints into an incremental list
//! - [`storage`] keeps the user's preferences and session on disk
//! - [`viewmodel`] holds per-screen state and exposes it as a stream
//!
//! The `cinescope` binary in `main.rs` drives the view-models from the
//! command line.

pub mod adapters;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod flow;
pub mod logging;
pub mod models;
pub mod outcome;
pub mod paging;
pub mod repository;
pub mod storage;
pub mod traits;
pub mod viewmodel;
