use std::sync::Arc;

use futures::stream::BoxStream;

use super::{into_outcome, single};
use crate::api::{IntoDomain, TmdbClient};
use crate::models::{Credit, MovieDetails};
use crate::outcome::Outcome;

/// Details and credits of one movie.
#[derive(Debug, Clone)]
pub struct MovieDetailsRepository {
    client: Arc<TmdbClient>,
}

impl MovieDetailsRepository {
    pub fn new(client: Arc<TmdbClient>) -> Self {
        Self { client }
    }

    pub async fn movie_details(&self, movie_id: u64) -> Outcome<MovieDetails> {
        let result = self
            .client
            .movie_details(movie_id)
            .await
            .map(|dto| dto.into_domain(self.client.images()));
        into_outcome("movie_details", result)
    }

    pub async fn credits(&self, movie_id: u64) -> Outcome<Credit> {
        let result = self
            .client
            .movie_credits(movie_id)
            .await
            .map(|dto| dto.into_domain(self.client.images()));
        into_outcome("movie_credits", result)
    }

    pub fn movie_details_stream(&self, movie_id: u64) -> BoxStream<'static, Outcome<MovieDetails>> {
        let repo = self.clone();
        single(async move { repo.movie_details(movie_id).await })
    }

    pub fn credits_stream(&self, movie_id: u64) -> BoxStream<'static, Outcome<Credit>> {
        let repo = self.clone();
        single(async move { repo.credits(movie_id).await })
    }
}
