use futures::stream::BoxStream;

use super::dispatch;
use super::scope::ViewModelScope;
use crate::flow::StateFlow;
use crate::models::UserData;
use crate::outcome::Outcome;
use crate::repository::AuthRepository;

#[derive(Clone, Default, PartialEq)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub is_loading: bool,
    pub error_message: Option<String>,
    /// Set once a login succeeds
    pub user: Option<UserData>,
}

impl LoginState {
    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.username.trim().is_empty() && !self.password.is_empty()
    }
}

impl std::fmt::Debug for LoginState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginState")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("is_loading", &self.is_loading)
            .field("error_message", &self.error_message)
            .field("user", &self.user)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub enum LoginEvent {
    UsernameChanged(String),
    PasswordChanged(String),
    Submitted,
    Finished(Outcome<UserData>),
}

pub fn reduce(state: &LoginState, event: LoginEvent) -> LoginState {
    match event {
        LoginEvent::UsernameChanged(username) => LoginState {
            username,
            error_message: None,
            ..state.clone()
        },
        LoginEvent::PasswordChanged(password) => LoginState {
            password,
            error_message: None,
            ..state.clone()
        },
        LoginEvent::Submitted if state.is_loading => state.clone(),
        LoginEvent::Submitted if !state.can_submit() => LoginState {
            error_message: Some("Enter a username and password.".to_string()),
            ..state.clone()
        },
        LoginEvent::Submitted => LoginState {
            is_loading: true,
            error_message: None,
            ..state.clone()
        },
        LoginEvent::Finished(Outcome::Success(user)) => LoginState {
            password: String::new(),
            is_loading: false,
            user: Some(user),
            ..state.clone()
        },
        LoginEvent::Finished(Outcome::Failure(failure)) => LoginState {
            is_loading: false,
            error_message: Some(failure.error_response),
            ..state.clone()
        },
    }
}

/// Username and password sign-in.
pub struct LoginViewModel {
    auth: AuthRepository,
    state: StateFlow<LoginState>,
    scope: ViewModelScope,
}

impl LoginViewModel {
    pub fn new(auth: AuthRepository) -> Self {
        Self {
            auth,
            state: StateFlow::new(LoginState::default()),
            scope: ViewModelScope::new(),
        }
    }

    pub fn state(&self) -> BoxStream<'static, LoginState> {
        self.state.stream()
    }

    pub fn current(&self) -> LoginState {
        self.state.value()
    }

    pub fn set_username(&self, username: impl Into<String>) {
        dispatch(&self.state, reduce, LoginEvent::UsernameChanged(username.into()));
    }

    pub fn set_password(&self, password: impl Into<String>) {
        dispatch(&self.state, reduce, LoginEvent::PasswordChanged(password.into()));
    }

    /// Submit the entered credentials. Ignored while a login is running.
    pub fn login(&self) {
        let before = self.state.value();
        dispatch(&self.state, reduce, LoginEvent::Submitted);
        if before.is_loading || !self.state.value().is_loading {
            return;
        }

        let (auth, state) = (self.auth.clone(), self.state.clone());
        self.scope.spawn(async move {
            let outcome = auth.login(before.username.trim(), &before.password).await;
            dispatch(&state, reduce, LoginEvent::Finished(outcome));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Failure;

    fn filled() -> LoginState {
        LoginState {
            username: "ada".to_string(),
            password: "pw".to_string(),
            ..LoginState::default()
        }
    }

    #[test]
    fn test_blank_fields_rejected() {
        let state = reduce(&LoginState::default(), LoginEvent::Submitted);
        assert!(!state.is_loading);
        assert!(state.error_message.is_some());
    }

    #[test]
    fn test_submit_starts_loading_once() {
        let state = reduce(&filled(), LoginEvent::Submitted);
        assert!(state.is_loading);
        assert_eq!(reduce(&state, LoginEvent::Submitted), state);
    }

    #[test]
    fn test_failure_shows_message() {
        let state = reduce(&filled(), LoginEvent::Submitted);
        let state = reduce(
            &state,
            LoginEvent::Finished(Outcome::Failure(
                Failure::new("Authentication required. Please sign in again.").with_code(401),
            )),
        );
        assert!(!state.is_loading);
        assert!(state.user.is_none());
        assert_eq!(state.password, "pw");
        assert!(state.error_message.unwrap().contains("sign in"));
    }

    #[test]
    fn test_success_clears_password() {
        let state = reduce(
            &reduce(&filled(), LoginEvent::Submitted),
            LoginEvent::Finished(Outcome::Success(UserData {
                is_logged_in: true,
                ..UserData::default()
            })),
        );
        assert!(state.password.is_empty());
        assert!(state.user.unwrap().is_logged_in);
    }

    #[test]
    fn test_debug_hides_password() {
        assert!(!format!("{:?}", filled()).contains("pw\""));
    }
}
