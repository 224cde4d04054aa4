use std::sync::Arc;

use futures::stream::BoxStream;

use super::{into_outcome, single};
use crate::api::{IntoDomain, TmdbClient};
use crate::models::{Paged, Person};
use crate::outcome::Outcome;

/// Popular people list.
#[derive(Debug, Clone)]
pub struct PeopleRepository {
    client: Arc<TmdbClient>,
}

impl PeopleRepository {
    pub fn new(client: Arc<TmdbClient>) -> Self {
        Self { client }
    }

    pub async fn popular_people(&self, page: u32) -> Outcome<Paged<Person>> {
        let result = self
            .client
            .popular_people(page)
            .await
            .map(|dto| dto.into_domain(self.client.images()));
        into_outcome("popular_people", result)
    }

    pub fn popular_people_stream(&self, page: u32) -> BoxStream<'static, Outcome<Paged<Person>>> {
        let repo = self.clone();
        single(async move { repo.popular_people(page).await })
    }
}
