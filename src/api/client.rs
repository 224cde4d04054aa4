//! Client for the movie database REST API.
//!
//! Every method issues exactly one HTTP request and returns the decoded DTO
//! or an [`AppError`]. Non-2xx responses become
//! [`NetworkError::HttpStatus`] carrying the API's `status_message`.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::dto::{
    AccountDto, ApiErrorDto, CreditsDto, DeleteSessionDto, LoginRequestDto, MovieDetailsDto,
    MovieDto, PagedDto, PersonDetailsDto, PersonDto, PersonMovieCreditsDto, RequestTokenDto,
    SessionDto, SessionRequestDto, StatusDto, TvShowDto,
};
use super::interceptor::AuthInterceptor;
use super::mapping::ImageUrls;
use crate::adapters::ReqwestHttpClient;
use crate::config::ApiConfig;
use crate::error::{AppError, AppResult, NetworkError};
use crate::models::{MovieCategory, TvCategory};
use crate::traits::{HttpClient, Response};

/// Client for the movie database API.
#[derive(Clone)]
pub struct TmdbClient {
    /// Base URL without a trailing slash
    base_url: String,
    http: Arc<dyn HttpClient>,
    interceptor: AuthInterceptor,
    images: ImageUrls,
}

impl TmdbClient {
    /// Create a client over an injected HTTP transport.
    pub fn new(http: Arc<dyn HttpClient>, config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
            interceptor: AuthInterceptor::new(config.access_token.clone()),
            images: ImageUrls::new(config.image_base_url.clone()),
        }
    }

    /// Create a client backed by reqwest using the configured timeout.
    pub fn from_config(config: &ApiConfig) -> AppResult<Self> {
        let http = ReqwestHttpClient::with_timeout(config.timeout())?;
        Ok(Self::new(Arc::new(http), config))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolver for image paths found in responses.
    pub fn images(&self) -> &ImageUrls {
        &self.images
    }

    /// GET /movie/{category}?page=N
    pub async fn movies(&self, category: MovieCategory, page: u32) -> AppResult<PagedDto<MovieDto>> {
        self.get_json(&format!("/movie/{}?page={}", category.path(), page))
            .await
    }

    /// GET /movie/{id}
    pub async fn movie_details(&self, movie_id: u64) -> AppResult<MovieDetailsDto> {
        self.get_json(&format!("/movie/{}", movie_id)).await
    }

    /// GET /movie/{id}/credits
    pub async fn movie_credits(&self, movie_id: u64) -> AppResult<CreditsDto> {
        self.get_json(&format!("/movie/{}/credits", movie_id)).await
    }

    /// GET /person/popular?page=N
    pub async fn popular_people(&self, page: u32) -> AppResult<PagedDto<PersonDto>> {
        self.get_json(&format!("/person/popular?page={}", page)).await
    }

    /// GET /person/{id}
    pub async fn person_details(&self, person_id: u64) -> AppResult<PersonDetailsDto> {
        self.get_json(&format!("/person/{}", person_id)).await
    }

    /// GET /person/{id}/movie_credits
    pub async fn person_movie_credits(&self, person_id: u64) -> AppResult<PersonMovieCreditsDto> {
        self.get_json(&format!("/person/{}/movie_credits", person_id))
            .await
    }

    /// GET /tv/{category}?page=N
    pub async fn tv_shows(&self, category: TvCategory, page: u32) -> AppResult<PagedDto<TvShowDto>> {
        self.get_json(&format!("/tv/{}?page={}", category.path(), page))
            .await
    }

    /// GET /authentication/token/new
    pub async fn create_request_token(&self) -> AppResult<RequestTokenDto> {
        self.get_json("/authentication/token/new").await
    }

    /// POST /authentication/token/validate_with_login
    ///
    /// Returns the same request token, now approved for session creation.
    pub async fn validate_with_login(
        &self,
        username: &str,
        password: &str,
        request_token: &str,
    ) -> AppResult<RequestTokenDto> {
        let body = LoginRequestDto {
            username,
            password,
            request_token,
        };
        self.post_json("/authentication/token/validate_with_login", &body)
            .await
    }

    /// POST /authentication/session/new
    pub async fn create_session(&self, request_token: &str) -> AppResult<SessionDto> {
        let session: SessionDto = self
            .post_json(
                "/authentication/session/new",
                &SessionRequestDto { request_token },
            )
            .await?;
        if !session.success || session.session_id.is_empty() {
            return Err(NetworkError::InvalidResponse {
                message: "session was not created".to_string(),
            }
            .into());
        }
        Ok(session)
    }

    /// GET /account?session_id=…
    pub async fn account(&self, session_id: &str) -> AppResult<AccountDto> {
        self.get_json(&format!(
            "/account?session_id={}",
            urlencoding::encode(session_id)
        ))
        .await
    }

    /// DELETE /authentication/session
    pub async fn delete_session(&self, session_id: &str) -> AppResult<StatusDto> {
        let path = "/authentication/session";
        let body = serde_json::to_string(&DeleteSessionDto { session_id })
            .map_err(NetworkError::from)?;
        let url = self.url(path);
        tracing::debug!(%url, "DELETE");
        let response = self
            .http
            .delete(&url, &body, &self.interceptor.json_headers_for(path))
            .await?;
        Self::decode(response)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(&url, &self.interceptor.headers_for(path))
            .await?;
        Self::decode(response)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> AppResult<T> {
        let url = self.url(path);
        let body = serde_json::to_string(body).map_err(NetworkError::from)?;
        tracing::debug!(%url, "POST");
        let response = self
            .http
            .post(&url, &body, &self.interceptor.json_headers_for(path))
            .await?;
        Self::decode(response)
    }

    /// Check the status, then decode the body.
    fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        if !response.is_success() {
            return Err(Self::status_error(&response).into());
        }
        response
            .json()
            .map_err(|e| AppError::from(NetworkError::from(e)))
    }

    fn status_error(response: &Response) -> NetworkError {
        let message = match response.json::<ApiErrorDto>() {
            Ok(envelope) => envelope.status_message,
            Err(_) => response
                .text()
                .map(|t| t.chars().take(200).collect())
                .unwrap_or_default(),
        };
        NetworkError::HttpStatus {
            status: response.status,
            message,
        }
    }
}

impl std::fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbClient")
            .field("base_url", &self.base_url)
            .field("images", &self.images)
            .finish()
    }
}
