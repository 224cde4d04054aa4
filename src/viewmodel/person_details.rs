use std::sync::{Mutex, PoisonError};

use futures::stream::BoxStream;
use tokio::task::AbortHandle;

use super::dispatch;
use super::scope::ViewModelScope;
use crate::flow::StateFlow;
use crate::models::{PersonCredit, PersonDetails};
use crate::outcome::Outcome;
use crate::repository::PeopleDetailsRepository;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonDetailsState {
    pub person_id: u64,
    pub details: Option<PersonDetails>,
    pub credits: Vec<PersonCredit>,
    pub is_loading_details: bool,
    pub is_loading_credits: bool,
    pub error_message: Option<String>,
}

impl PersonDetailsState {
    pub fn is_loading(&self) -> bool {
        self.is_loading_details || self.is_loading_credits
    }
}

#[derive(Debug, Clone)]
pub enum PersonDetailsEvent {
    LoadStarted,
    DetailsLoaded(Outcome<PersonDetails>),
    CreditsLoaded(Outcome<Vec<PersonCredit>>),
}

pub fn reduce(state: &PersonDetailsState, event: PersonDetailsEvent) -> PersonDetailsState {
    match event {
        PersonDetailsEvent::LoadStarted => PersonDetailsState {
            is_loading_details: true,
            is_loading_credits: true,
            error_message: None,
            ..state.clone()
        },
        PersonDetailsEvent::DetailsLoaded(outcome) => match outcome {
            Outcome::Success(details) => PersonDetailsState {
                details: Some(details),
                is_loading_details: false,
                ..state.clone()
            },
            Outcome::Failure(failure) => PersonDetailsState {
                is_loading_details: false,
                error_message: Some(failure.error_response),
                ..state.clone()
            },
        },
        // credits are secondary: a failure leaves the list empty silently
        PersonDetailsEvent::CreditsLoaded(outcome) => PersonDetailsState {
            credits: outcome.into_success().unwrap_or_default(),
            is_loading_credits: false,
            ..state.clone()
        },
    }
}

/// One person's biography and filmography.
pub struct PersonDetailsViewModel {
    repository: PeopleDetailsRepository,
    state: StateFlow<PersonDetailsState>,
    scope: ViewModelScope,
    // tasks of the most recent load; a new load aborts them
    loads: Mutex<Vec<AbortHandle>>,
}

impl PersonDetailsViewModel {
    pub fn new(repository: PeopleDetailsRepository, person_id: u64) -> Self {
        let vm = Self {
            repository,
            state: StateFlow::new(PersonDetailsState {
                person_id,
                ..PersonDetailsState::default()
            }),
            scope: ViewModelScope::new(),
            loads: Mutex::new(Vec::new()),
        };
        vm.load();
        vm
    }

    pub fn state(&self) -> BoxStream<'static, PersonDetailsState> {
        self.state.stream()
    }

    pub fn current(&self) -> PersonDetailsState {
        self.state.value()
    }

    pub fn retry(&self) {
        self.load();
    }

    fn load(&self) {
        let mut loads = self.loads.lock().unwrap_or_else(PoisonError::into_inner);
        for handle in loads.drain(..) {
            handle.abort();
        }

        let person_id = self.state.value().person_id;
        dispatch(&self.state, reduce, PersonDetailsEvent::LoadStarted);

        let (repository, state) = (self.repository.clone(), self.state.clone());
        loads.push(self.scope.spawn(async move {
            let outcome = repository.person_details(person_id).await;
            dispatch(&state, reduce, PersonDetailsEvent::DetailsLoaded(outcome));
        }));

        let (repository, state) = (self.repository.clone(), self.state.clone());
        loads.push(self.scope.spawn(async move {
            let outcome = repository.movie_credits(person_id).await;
            dispatch(&state, reduce, PersonDetailsEvent::CreditsLoaded(outcome));
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
    use crate::traits::Response;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_details_failure_sets_message() {
        let state = reduce(&PersonDetailsState::default(), PersonDetailsEvent::LoadStarted);
        let state = reduce(
            &state,
            PersonDetailsEvent::DetailsLoaded(Outcome::Failure(
                Failure::new("The requested title could not be found.").with_code(404),
            )),
        );
        assert!(!state.is_loading_details);
        assert!(state.is_loading_credits);
        assert_eq!(
            state.error_message.as_deref(),
            Some("The requested title could not be found.")
        );
    }

    #[test]
    fn test_credits_failure_is_silent() {
        let state = reduce(&PersonDetailsState::default(), PersonDetailsEvent::LoadStarted);
        let state = reduce(
            &state,
            PersonDetailsEvent::CreditsLoaded(Outcome::Failure(Failure::new("offline"))),
        );
        assert!(state.credits.is_empty());
        assert_eq!(state.error_message, None);
        assert!(!state.is_loading_credits);
        assert!(state.is_loading());
    }

    #[tokio::test]
    async fn test_retry_replaces_pending_load() {
        const BASE: &str = "https://api.test/3";
        let mock = MockHttpClient::new();
        mock.set_response(
            &format!("{BASE}/person/287"),
            MockResponse::Delayed(
                Duration::from_millis(100),
                Response::json_body(503, &json!({"status_code": 9, "status_message": "Service offline"})),
            ),
        );
        mock.set_response(
            &format!("{BASE}/person/287/movie_credits"),
            MockResponse::json(200, json!({"id": 287, "cast": [], "crew": []})),
        );
        let config = ApiConfig::new("t").with_base_url(BASE);
        let repo = PeopleDetailsRepository::new(Arc::new(TmdbClient::new(Arc::new(mock.clone()), &config)));

        let vm = PersonDetailsViewModel::new(repo, 287);
        tokio::time::sleep(Duration::from_millis(10)).await;
        mock.set_response(
            &format!("{BASE}/person/287"),
            MockResponse::json(200, json!({"id": 287, "name": "Brad Pitt"})),
        );
        vm.retry();

        tokio::time::sleep(Duration::from_millis(200)).await;
        let state = vm.current();
        assert_eq!(state.details.clone().map(|d| d.name).as_deref(), Some("Brad Pitt"));
        assert_eq!(state.error_message, None);
        assert!(!state.is_loading());
    }
}
