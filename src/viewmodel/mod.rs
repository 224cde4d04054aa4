//! Per-screen state holders.
//!
//! Every screen has a `*State` value, an `*Event` enum and a pure `reduce`
//! function that folds an event into a new state. The `*ViewModel` wires
//! repositories to that reducer: intent methods start work on the
//! view-model's [`ViewModelScope`], and each result is dispatched as an
//! event. Observers read the state through a replaying stream.
//!
//! Dropping a view-model cancels everything it started.

mod feed;
mod login;
mod main_screen;
mod movie_details;
mod movies;
mod people;
mod person_details;
mod scope;
mod settings;
mod tv_shows;

pub use login::{LoginEvent, LoginState, LoginViewModel};
pub use main_screen::{MainEvent, MainState, MainViewModel};
pub use movie_details::{MovieDetailsEvent, MovieDetailsState, MovieDetailsViewModel};
pub use movies::{MoviesEvent, MoviesState, MoviesViewModel};
pub use people::{PeopleEvent, PeopleState, PeopleViewModel};
pub use person_details::{PersonDetailsEvent, PersonDetailsState, PersonDetailsViewModel};
pub use scope::ViewModelScope;
pub use settings::{SettingsEvent, SettingsState, SettingsViewModel};
pub use tv_shows::{TvShowsEvent, TvShowsState, TvShowsViewModel};

use crate::flow::StateFlow;
use crate::paging::PagingData;

/// Fold `event` into the state held by `flow`.
pub(crate) fn dispatch<S, E>(flow: &StateFlow<S>, reduce: fn(&S, E) -> S, event: E)
where
    S: Clone + Send + Sync + 'static,
{
    flow.update(|state| *state = reduce(state, event));
}

/// Message to show for a paged list, if any load failed.
pub(crate) fn paging_error<V>(data: &PagingData<V>) -> Option<String> {
    data.error().map(|failure| failure.error_response.clone())
}
