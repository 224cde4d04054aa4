use std::sync::{Mutex, PoisonError};

use futures::stream::BoxStream;
use tokio::task::AbortHandle;

use super::dispatch;
use super::scope::ViewModelScope;
use crate::flow::StateFlow;
use crate::models::{Credit, MovieDetails};
use crate::outcome::Outcome;
use crate::repository::MovieDetailsRepository;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieDetailsState {
    pub movie_id: u64,
    pub details: Option<MovieDetails>,
    pub credits: Option<Credit>,
    pub is_loading_details: bool,
    pub is_loading_credits: bool,
    pub error_message: Option<String>,
}

impl MovieDetailsState {
    pub fn is_loading(&self) -> bool {
        self.is_loading_details || self.is_loading_credits
    }
}

#[derive(Debug, Clone)]
pub enum MovieDetailsEvent {
    LoadStarted,
    DetailsLoaded(Outcome<MovieDetails>),
    CreditsLoaded(Outcome<Credit>),
}

pub fn reduce(state: &MovieDetailsState, event: MovieDetailsEvent) -> MovieDetailsState {
    match event {
        MovieDetailsEvent::LoadStarted => MovieDetailsState {
            is_loading_details: true,
            is_loading_credits: true,
            error_message: None,
            ..state.clone()
        },
        MovieDetailsEvent::DetailsLoaded(Outcome::Success(details)) => MovieDetailsState {
            details: Some(details),
            is_loading_details: false,
            ..state.clone()
        },
        MovieDetailsEvent::DetailsLoaded(Outcome::Failure(failure)) => MovieDetailsState {
            is_loading_details: false,
            error_message: Some(failure.error_response),
            ..state.clone()
        },
        MovieDetailsEvent::CreditsLoaded(Outcome::Success(credits)) => MovieDetailsState {
            credits: Some(credits),
            is_loading_credits: false,
            ..state.clone()
        },
        MovieDetailsEvent::CreditsLoaded(Outcome::Failure(failure)) => MovieDetailsState {
            is_loading_credits: false,
            // a details failure is the more useful message
            error_message: state.error_message.clone().or(Some(failure.error_response)),
            ..state.clone()
        },
    }
}

/// Details and credits of one movie, loaded concurrently.
pub struct MovieDetailsViewModel {
    repository: MovieDetailsRepository,
    state: StateFlow<MovieDetailsState>,
    scope: ViewModelScope,
    // tasks of the most recent load; a new load aborts them
    loads: Mutex<Vec<AbortHandle>>,
}

impl MovieDetailsViewModel {
    pub fn new(repository: MovieDetailsRepository, movie_id: u64) -> Self {
        let vm = Self {
            repository,
            state: StateFlow::new(MovieDetailsState {
                movie_id,
                ..MovieDetailsState::default()
            }),
            scope: ViewModelScope::new(),
            loads: Mutex::new(Vec::new()),
        };
        vm.load();
        vm
    }

    pub fn state(&self) -> BoxStream<'static, MovieDetailsState> {
        self.state.stream()
    }

    pub fn current(&self) -> MovieDetailsState {
        self.state.value()
    }

    /// Load details and credits again.
    pub fn retry(&self) {
        self.load();
    }

    fn load(&self) {
        let mut loads = self.loads.lock().unwrap_or_else(PoisonError::into_inner);
        for handle in loads.drain(..) {
            handle.abort();
        }

        let movie_id = self.state.value().movie_id;
        dispatch(&self.state, reduce, MovieDetailsEvent::LoadStarted);

        let (repository, state) = (self.repository.clone(), self.state.clone());
        loads.push(self.scope.spawn(async move {
            let outcome = repository.movie_details(movie_id).await;
            dispatch(&state, reduce, MovieDetailsEvent::DetailsLoaded(outcome));
        }));

        let (repository, state) = (self.repository.clone(), self.state.clone());
        loads.push(self.scope.spawn(async move {
            let outcome = repository.credits(movie_id).await;
            dispatch(&state, reduce, MovieDetailsEvent::CreditsLoaded(outcome));
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::api::TmdbClient;
    use crate::config::ApiConfig;
    use crate::outcome::Failure;
    use futures::StreamExt;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_credits_failure_keeps_details() {
        let loaded = reduce(
            &MovieDetailsState::default(),
            MovieDetailsEvent::LoadStarted,
        );
        assert!(loaded.is_loading());

        let state = reduce(
            &loaded,
            MovieDetailsEvent::CreditsLoaded(Outcome::Failure(Failure::new("No credits"))),
        );
        assert!(!state.is_loading_credits);
        assert!(state.is_loading_details);
        assert_eq!(state.error_message.as_deref(), Some("No credits"));
    }

    #[test]
    fn test_load_started_clears_error() {
        let state = MovieDetailsState {
            error_message: Some("offline".to_string()),
            ..MovieDetailsState::default()
        };
        assert_eq!(
            reduce(&state, MovieDetailsEvent::LoadStarted).error_message,
            None
        );
    }

    #[tokio::test]
    async fn test_loads_details_and_credits() {
        const BASE: &str = "https://api.test/3";
        let mock = MockHttpClient::new();
        mock.set_response(
            &format!("{BASE}/movie/550"),
            MockResponse::json(200, json!({"id": 550, "title": "Fight Club"})),
        );
        mock.set_response(
            &format!("{BASE}/movie/550/credits"),
            MockResponse::json(
                200,
                json!({"id": 550, "cast": [{"id": 819, "name": "Edward Norton", "character": "Narrator", "order": 0}], "crew": []}),
            ),
        );
        let config = ApiConfig::new("t").with_base_url(BASE);
        let repo = MovieDetailsRepository::new(Arc::new(TmdbClient::new(Arc::new(mock), &config)));

        let vm = MovieDetailsViewModel::new(repo, 550);
        let mut states = vm.state();
        let state = loop {
            let state = states.next().await.unwrap();
            if !state.is_loading() {
                break state;
            }
        };
        assert_eq!(state.details.unwrap().title, "Fight Club");
        assert_eq!(state.credits.unwrap().cast[0].name, "Edward Norton");
        assert_eq!(state.error_message, None);
    }

    #[tokio::test]
    async fn test_drop_cancels_pending_load() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Delayed(
            Duration::from_millis(50),
            crate::traits::Response::json_body(200, &json!({"id": 1, "title": "Late"})),
        ));
        let config = ApiConfig::new("t").with_base_url("https://api.test/3");
        let repo = MovieDetailsRepository::new(Arc::new(TmdbClient::new(Arc::new(mock), &config)));

        let vm = MovieDetailsViewModel::new(repo, 1);
        let state = vm.state.clone();
        drop(vm);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(state.value().details.is_none());
        assert!(state.value().is_loading_details);
    }

    #[tokio::test]
    async fn test_retry_replaces_pending_load() {
        const BASE: &str = "https://api.test/3";
        let mock = MockHttpClient::new();
        mock.set_response(
            &format!("{BASE}/movie/550"),
            MockResponse::Delayed(
                Duration::from_millis(100),
                crate::traits::Response::json_body(500, &json!({"status_code": 11, "status_message": "Internal error"})),
            ),
        );
        mock.set_response(
            &format!("{BASE}/movie/550/credits"),
            MockResponse::json(200, json!({"id": 550, "cast": [], "crew": []})),
        );
        let config = ApiConfig::new("t").with_base_url(BASE);
        let repo = MovieDetailsRepository::new(Arc::new(TmdbClient::new(Arc::new(mock.clone()), &config)));

        let vm = MovieDetailsViewModel::new(repo, 550);
        // let the first details request start waiting on its delayed failure
        tokio::time::sleep(Duration::from_millis(10)).await;
        mock.set_response(
            &format!("{BASE}/movie/550"),
            MockResponse::json(200, json!({"id": 550, "title": "Fight Club"})),
        );
        vm.retry();

        tokio::time::sleep(Duration::from_millis(200)).await;
        let state = vm.current();
        assert_eq!(state.details.clone().map(|d| d.title).as_deref(), Some("Fight Club"));
        assert_eq!(state.error_message, None);
        assert!(!state.is_loading());
    }
}
