//! Wiring of clients, storage and repositories, built once at startup.

use std::sync::Arc;

use crate::api::TmdbClient;
use crate::config::ApiConfig;
use crate::error::AppResult;
use crate::repository::{
    AuthRepository, MovieDetailsRepository, MoviesRepository, PeopleDetailsRepository,
    PeopleRepository, TvShowsRepository, UserDataRepository,
};
use crate::storage::UserPreferences;
use crate::traits::{HttpClient, UserDataStore};

/// Everything a command needs, shared by reference.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub movies: MoviesRepository,
    pub movie_details: MovieDetailsRepository,
    pub people: PeopleRepository,
    pub people_details: PeopleDetailsRepository,
    pub tv_shows: TvShowsRepository,
    pub auth: AuthRepository,
    pub user_data: UserDataRepository,
    pub preferences: Arc<UserPreferences>,
}

impl AppContext {
    /// Build the context over explicit transport and storage.
    pub async fn new(
        http: Arc<dyn HttpClient>,
        api: &ApiConfig,
        store: Arc<dyn UserDataStore>,
    ) -> AppResult<Self> {
        let client = Arc::new(TmdbClient::new(http, api));
        let preferences = Arc::new(UserPreferences::open(store).await?);
        Ok(Self::from_parts(client, preferences))
    }

    pub fn from_parts(client: Arc<TmdbClient>, preferences: Arc<UserPreferences>) -> Self {
        Self {
            movies: MoviesRepository::new(client.clone()),
            movie_details: MovieDetailsRepository::new(client.clone()),
            people: PeopleRepository::new(client.clone()),
            people_details: PeopleDetailsRepository::new(client.clone()),
            tv_shows: TvShowsRepository::new(client.clone()),
            auth: AuthRepository::new(client, preferences.clone()),
            user_data: UserDataRepository::new(preferences.clone()),
            preferences,
        }
    }
}
