use std::sync::Arc;

use futures::stream::BoxStream;

use super::{into_outcome, single};
use crate::api::{IntoDomain, TmdbClient};
use crate::models::{Movie, MovieCategory, Paged};
use crate::outcome::Outcome;

/// Movie lists by category.
#[derive(Debug, Clone)]
pub struct MoviesRepository {
    client: Arc<TmdbClient>,
}

impl MoviesRepository {
    pub fn new(client: Arc<TmdbClient>) -> Self {
        Self { client }
    }

    /// One page of movies in `category`, in API order.
    pub async fn movies(&self, category: MovieCategory, page: u32) -> Outcome<Paged<Movie>> {
        let result = self
            .client
            .movies(category, page)
            .await
            .map(|dto| dto.into_domain(self.client.images()));
        into_outcome("movies", result)
    }

    pub fn movies_stream(
        &self,
        category: MovieCategory,
        page: u32,
    ) -> BoxStream<'static, Outcome<Paged<Movie>>> {
        let repo = self.clone();
        single(async move { repo.movies(category, page).await })
    }
}
