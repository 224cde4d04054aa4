//! Request decoration applied to every outgoing API call.

use crate::traits::Headers;

/// Paths that create tokens or sessions and must go out without a bearer.
const UNAUTHENTICATED_PATHS: [&str; 3] = [
    "/authentication/token/new",
    "/authentication/token/validate_with_login",
    "/authentication/session/new",
];

/// Adds the `Accept` header to every request and the bearer token to every
/// request outside the token/session creation endpoints.
#[derive(Clone)]
pub struct AuthInterceptor {
    access_token: String,
}

impl AuthInterceptor {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    /// Whether a request to `path` carries the bearer token.
    ///
    /// `path` is relative to the API base URL and may include a query string.
    pub fn requires_auth(path: &str) -> bool {
        let path = path.split('?').next().unwrap_or(path);
        !UNAUTHENTICATED_PATHS.contains(&path)
    }

    /// Headers for a request to `path`.
    pub fn headers_for(&self, path: &str) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        if Self::requires_auth(path) && !self.access_token.is_empty() {
            headers.insert(
                "Authorization".to_string(),
                format!("Bearer {}", self.access_token),
            );
        }
        headers
    }

    /// Headers for a request to `path` that sends a JSON body.
    pub fn json_headers_for(&self, path: &str) -> Headers {
        let mut headers = self.headers_for(path);
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers
    }
}

impl std::fmt::Debug for AuthInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthInterceptor")
            .field("access_token", &"<redacted>")
            .finish()
    }
}
