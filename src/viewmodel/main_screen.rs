use futures::stream::BoxStream;
use futures::StreamExt;

use super::dispatch;
use super::scope::ViewModelScope;
use crate::flow::StateFlow;
use crate::models::{ThemeConfig, UserData};
use crate::repository::UserDataRepository;

/// App-level state: nothing is shown until preferences are known.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum MainState {
    #[default]
    Loading,
    Success(UserData),
}

impl MainState {
    /// Theme to apply, once known.
    pub fn theme(&self) -> Option<ThemeConfig> {
        match self {
            MainState::Loading => None,
            MainState::Success(data) => Some(data.theme_config),
        }
    }

    /// Whether the login screen should be shown, once known.
    pub fn needs_login(&self) -> Option<bool> {
        match self {
            MainState::Loading => None,
            MainState::Success(data) => Some(!data.is_logged_in),
        }
    }
}

#[derive(Debug, Clone)]
pub enum MainEvent {
    UserDataChanged(UserData),
}

pub fn reduce(_state: &MainState, event: MainEvent) -> MainState {
    match event {
        MainEvent::UserDataChanged(data) => MainState::Success(data),
    }
}

/// Tracks the stored preferences for the app shell.
pub struct MainViewModel {
    state: StateFlow<MainState>,
    _scope: ViewModelScope,
}

impl MainViewModel {
    pub fn new(user_data: &UserDataRepository) -> Self {
        let state = StateFlow::new(MainState::Loading);
        let scope = ViewModelScope::new();

        let mut updates = user_data.user_data();
        let flow = state.clone();
        scope.spawn(async move {
            while let Some(data) = updates.next().await {
                dispatch(&flow, reduce, MainEvent::UserDataChanged(data));
            }
        });

        Self {
            state,
            _scope: scope,
        }
    }

    pub fn state(&self) -> BoxStream<'static, MainState> {
        self.state.stream()
    }

    pub fn current(&self) -> MainState {
        self.state.value()
    }
}
