use futures::stream::BoxStream;
use futures::StreamExt;

use super::dispatch;
use super::scope::ViewModelScope;
use crate::flow::StateFlow;
use crate::models::{ThemeConfig, UserData};
use crate::outcome::{Failure, Outcome};
use crate::repository::{AuthRepository, UserDataRepository};

#[derive(Debug, Clone, PartialEq)]
pub struct SettingsState {
    /// `false` until the stored record has been read
    pub is_loaded: bool,
    pub theme_config: ThemeConfig,
    pub use_dynamic_color: bool,
    pub is_logged_in: bool,
    pub display_name: String,
    pub error_message: Option<String>,
}

impl Default for SettingsState {
    fn default() -> Self {
        let defaults = UserData::default();
        Self {
            is_loaded: false,
            theme_config: defaults.theme_config,
            use_dynamic_color: defaults.use_dynamic_color,
            is_logged_in: defaults.is_logged_in,
            display_name: String::new(),
            error_message: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum SettingsEvent {
    UserDataChanged(UserData),
    ActionFailed(Failure),
    ErrorDismissed,
}

pub fn reduce(state: &SettingsState, event: SettingsEvent) -> SettingsState {
    match event {
        SettingsEvent::UserDataChanged(data) => SettingsState {
            is_loaded: true,
            theme_config: data.theme_config,
            use_dynamic_color: data.use_dynamic_color,
            is_logged_in: data.is_logged_in,
            display_name: data.display_name().to_string(),
            error_message: state.error_message.clone(),
        },
        SettingsEvent::ActionFailed(failure) => SettingsState {
            error_message: Some(failure.error_response),
            ..state.clone()
        },
        SettingsEvent::ErrorDismissed => SettingsState {
            error_message: None,
            ..state.clone()
        },
    }
}

/// Theme, dynamic colour and account settings.
pub struct SettingsViewModel {
    user_data: UserDataRepository,
    auth: AuthRepository,
    state: StateFlow<SettingsState>,
    scope: ViewModelScope,
}

impl SettingsViewModel {
    pub fn new(user_data: UserDataRepository, auth: AuthRepository) -> Self {
        let vm = Self {
            user_data,
            auth,
            state: StateFlow::new(SettingsState::default()),
            scope: ViewModelScope::new(),
        };

        let mut updates = vm.user_data.user_data();
        let state = vm.state.clone();
        vm.scope.spawn(async move {
            while let Some(data) = updates.next().await {
                dispatch(&state, reduce, SettingsEvent::UserDataChanged(data));
            }
        });
        vm
    }

    pub fn state(&self) -> BoxStream<'static, SettingsState> {
        self.state.stream()
    }

    pub fn current(&self) -> SettingsState {
        self.state.value()
    }

    pub fn set_theme_config(&self, theme: ThemeConfig) {
        let (repository, state) = (self.user_data.clone(), self.state.clone());
        self.scope.spawn(async move {
            report(&state, repository.set_theme_config(theme).await);
        });
    }

    pub fn set_use_dynamic_color(&self, enabled: bool) {
        let (repository, state) = (self.user_data.clone(), self.state.clone());
        self.scope.spawn(async move {
            report(&state, repository.set_use_dynamic_color(enabled).await);
        });
    }

    /// End the remote session and clear the local login.
    pub fn logout(&self) {
        let (auth, state) = (self.auth.clone(), self.state.clone());
        self.scope.spawn(async move {
            report(&state, auth.logout().await);
        });
    }

    pub fn dismiss_error(&self) {
        dispatch(&self.state, reduce, SettingsEvent::ErrorDismissed);
    }
}

/// Successful writes show up through the user-data stream; only failures
/// need dispatching.
fn report<T>(state: &StateFlow<SettingsState>, outcome: Outcome<T>) {
    if let Outcome::Failure(failure) = outcome {
        dispatch(state, reduce, SettingsEvent::ActionFailed(failure));
    }
}
