//! Incremental loading of paged lists.
//!
//! A [`PagingSource`] knows how to load one page for a key. A [`Pager`]
//! drives a source: it keeps the loaded pages, tracks refresh and append
//! load states and publishes a [`PagingData`] snapshot after every change.

mod pager;
mod source;
mod sources;

pub use pager::{LoadState, Pager, PagingData};
pub use source::{LoadKind, LoadParams, LoadResult, PagingConfig, PagingSource};
pub use sources::{page_result, MoviesPagingSource, PeoplePagingSource, TvShowsPagingSource};
