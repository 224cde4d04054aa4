use std::sync::Arc;

use futures::stream::BoxStream;

use super::{into_outcome, single};
use crate::api::{IntoDomain, TmdbClient};
use crate::models::{PersonCredit, PersonDetails};
use crate::outcome::Outcome;

/// Details and filmography of one person.
#[derive(Debug, Clone)]
pub struct PeopleDetailsRepository {
    client: Arc<TmdbClient>,
}

impl PeopleDetailsRepository {
    pub fn new(client: Arc<TmdbClient>) -> Self {
        Self { client }
    }

    pub async fn person_details(&self, person_id: u64) -> Outcome<PersonDetails> {
        let result = self
            .client
            .person_details(person_id)
            .await
            .map(|dto| dto.into_domain(self.client.images()));
        into_outcome("person_details", result)
    }

    /// Cast credits followed by crew credits.
    pub async fn movie_credits(&self, person_id: u64) -> Outcome<Vec<PersonCredit>> {
        let result = self
            .client
            .person_movie_credits(person_id)
            .await
            .map(|dto| dto.into_domain(self.client.images()));
        into_outcome("person_movie_credits", result)
    }

    pub fn person_details_stream(
        &self,
        person_id: u64,
    ) -> BoxStream<'static, Outcome<PersonDetails>> {
        let repo = self.clone();
        single(async move { repo.person_details(person_id).await })
    }

    pub fn movie_credits_stream(
        &self,
        person_id: u64,
    ) -> BoxStream<'static, Outcome<Vec<PersonCredit>>> {
        let repo = self.clone();
        single(async move { repo.movie_credits(person_id).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::config::ApiConfig;
    use serde_json::json;

    #[tokio::test]
    async fn test_movie_credits_cast_then_crew() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(
            200,
            json!({
                "cast": [{"id": 550, "title": "Fight Club", "character": "Tyler Durden", "release_date": "1999-10-15"}],
                "crew": [{"id": 9, "title": "Produced", "job": "Producer", "release_date": ""}]
            }),
        ));
        let config = ApiConfig::new("t").with_base_url("https://api.test/3");
        let repo =
            PeopleDetailsRepository::new(Arc::new(TmdbClient::new(Arc::new(mock.clone()), &config)));

        let credits = repo.movie_credits(287).await.into_success().unwrap();
        assert_eq!(credits.len(), 2);
        assert_eq!(credits[0].role, "Tyler Durden");
        assert_eq!(credits[1].role, "Producer");
        assert_eq!(credits[1].release_date, None);
    }
}
