//! Domain records shown by the client.
//!
//! These are built from API DTOs by [`crate::api::mapping`] and are never
//! mutated afterwards, with the exception of [`UserData`] which is owned by
//! local storage.

pub mod credit;
pub mod movie;
pub mod movie_details;
pub mod paged;
pub mod person;
pub mod tv;
pub mod user_data;

pub use credit::{CastMember, Credit, CrewMember};
pub use movie::{Movie, MovieCategory};
pub use movie_details::{Genre, MovieDetails};
pub use paged::Paged;
pub use person::{Person, PersonCredit, PersonDetails};
pub use tv::{TvCategory, TvShow};
pub use user_data::{Account, ThemeConfig, UserData};
