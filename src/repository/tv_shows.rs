use std::sync::Arc;

use futures::stream::BoxStream;

use super::{into_outcome, single};
use crate::api::{IntoDomain, TmdbClient};
use crate::models::{Paged, TvCategory, TvShow};
use crate::outcome::Outcome;

/// TV show lists by category.
#[derive(Debug, Clone)]
pub struct TvShowsRepository {
    client: Arc<TmdbClient>,
}

impl TvShowsRepository {
    pub fn new(client: Arc<TmdbClient>) -> Self {
        Self { client }
    }

    pub async fn tv_shows(&self, category: TvCategory, page: u32) -> Outcome<Paged<TvShow>> {
        let result = self
            .client
            .tv_shows(category, page)
            .await
            .map(|dto| dto.into_domain(self.client.images()));
        into_outcome("tv_shows", result)
    }

    pub fn tv_shows_stream(
        &self,
        category: TvCategory,
        page: u32,
    ) -> BoxStream<'static, Outcome<Paged<TvShow>>> {
        let repo = self.clone();
        single(async move { repo.tv_shows(category, page).await })
    }
}
