//! Authenticated API client with token refresh
//!
//! Every request passes through two interceptors:
//!
//! - **request**: the current access token from the [`TokenStore`] is
//!   attached as a bearer credential; without one the request goes out
//!   unauthenticated.
//! - **response**: a 401 on a first attempt renews the access token with the
//!   stored refresh token and resubmits the request once. A 401 on the
//!   resubmitted attempt, or any other failure, is returned as is. When the
//!   session cannot be renewed both tokens are cleared, the [`Navigator`] is
//!   sent to the landing route and the original 401 is returned.
//!
//! Renewals are single-flight: concurrent requests that hit a 401 with the
//! same stale token share one refresh call.

use std::sync::Arc;
use std::time::Duration;

use orion_core::{Navigator, NoopNavigator, TokenStore};
use orion_domain::constants::{DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS, TOKEN_REFRESH_PATH};
use orion_domain::{ApiConfig, ListPayload, Paginated, RefreshRequest, RefreshResponse};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::errors::ApiError;
use super::request::ApiRequest;
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientConfig {
    /// Base URL for API (e.g., "https://orionai.runagent.io")
    pub base_url: String,
    /// Timeout for API requests
    pub timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self { base_url: config.base_url.clone(), timeout: config.timeout() }
    }
}

/// Position of one request in the refresh state machine. A fresh request
/// starts un-retried; it is marked retried before it is resubmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Attempt {
    retried: bool,
}

impl Attempt {
    const fn initial() -> Self {
        Self { retried: false }
    }

    const fn resubmission(self) -> Self {
        Self { retried: true }
    }
}

/// Outcome of trying to renew the session after a 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Renewal {
    /// This request refreshed the access token.
    Refreshed,
    /// A concurrent request already stored a newer access token.
    Shared,
    /// The session is over; credentials are gone.
    Ended,
}

/// API client with bearer authentication and single-retry token refresh
pub struct ApiClient {
    http_client: HttpClient,
    store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    config: ApiClientConfig,
    refresh_lock: Mutex<()>,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is invalid or the HttpClient cannot be
    /// created
    pub fn new(
        config: ApiClientConfig,
        store: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        Url::parse(&config.base_url).map_err(|e| {
            ApiError::Config(format!("Invalid base URL '{}': {e}", config.base_url))
        })?;
        if config.timeout.is_zero() {
            return Err(ApiError::Config("Request timeout must be greater than zero".into()));
        }

        // The outer timeout in `transmit` is authoritative
        let http_client = HttpClient::builder()
            .timeout(config.timeout.saturating_add(Duration::from_secs(1)))
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {e}")))?;

        Ok(Self { http_client, store, navigator, config, refresh_lock: Mutex::new(()) })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    /// Execute a GET request
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.execute(&ApiRequest::get(path)).await
    }

    /// Execute a GET request with query parameters
    pub async fn get_with_query<Q, R>(&self, path: &str, query: &Q) -> Result<R, ApiError>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.execute(&ApiRequest::get(path).query(query)?).await
    }

    /// Fetch a list endpoint and normalize bare arrays into a page.
    pub async fn list<T, Q>(
        &self,
        path: &str,
        query: Option<&Q>,
    ) -> Result<Paginated<T>, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let mut request = ApiRequest::get(path);
        if let Some(query) = query {
            request = request.query(query)?;
        }

        let payload: ListPayload<T> = self.execute(&request).await?;
        Ok(payload.into_paginated())
    }

    /// Execute a POST request with a JSON body
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.execute(&ApiRequest::post(path).json(body)?).await
    }

    /// Execute a POST request without a body (action endpoints)
    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.execute(&ApiRequest::post(path)).await
    }

    /// Execute a PUT request
    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.execute(&ApiRequest::put(path).json(body)?).await
    }

    /// Execute a PATCH request
    pub async fn patch<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.execute(&ApiRequest::patch(path).json(body)?).await
    }

    /// Execute a DELETE request, discarding any response body
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let _: Value = self.execute(&ApiRequest::delete(path)).await?;
        Ok(())
    }

    /// Send a request through both interceptors and decode the JSON answer.
    ///
    /// # Errors
    ///
    /// Returns the mapped status error for non-success responses (after at
    /// most one token refresh), or a network, timeout, storage or decode
    /// error.
    #[instrument(skip(self, request), fields(method = %request.method(), path = %request.path()))]
    pub async fn execute<R: DeserializeOwned>(&self, request: &ApiRequest) -> Result<R, ApiError> {
        let response = self.dispatch(request).await?;
        let result = Self::decode(response).await?;
        debug!("request successful");
        Ok(result)
    }

    async fn dispatch(&self, request: &ApiRequest) -> Result<Response, ApiError> {
        let mut attempt = Attempt::initial();

        loop {
            let token = self.store.access_token().await?;
            let url = self.url(request.path());
            let response = self.send_once(request, &url, token.as_deref()).await?;

            let status = response.status();
            if status.is_success() {
                return Ok(response);
            }

            let error = Self::status_error(response, &url).await;
            if status != StatusCode::UNAUTHORIZED || attempt.retried {
                return Err(error);
            }

            match self.renew_session(token.as_deref()).await {
                Renewal::Refreshed | Renewal::Shared => {
                    debug!("resubmitting with renewed access token");
                    attempt = attempt.resubmission();
                }
                Renewal::Ended => return Err(error),
            }
        }
    }

    /// Obtain a usable access token after `stale` was rejected.
    async fn renew_session(&self, stale: Option<&str>) -> Renewal {
        let _guard = self.refresh_lock.lock().await;

        let current = match self.store.access_token().await {
            Ok(current) => current,
            Err(err) => {
                warn!(error = %err, "failed to read access token before refresh");
                None
            }
        };

        match (stale, current.as_deref()) {
            (_, Some(current)) if Some(current) != stale => {
                debug!("access token already renewed by a concurrent request");
                return Renewal::Shared;
            }
            (Some(_), None) => {
                debug!("session already ended by a concurrent request");
                return Renewal::Ended;
            }
            _ => {}
        }

        match self.refresh_access_token().await {
            Ok(()) => Renewal::Refreshed,
            Err(err) => {
                warn!(error = %err, "token refresh failed, ending session");
                self.end_session().await;
                Renewal::Ended
            }
        }
    }

    /// Call the refresh endpoint directly, outside the interceptor chain.
    async fn refresh_access_token(&self) -> Result<(), ApiError> {
        let refresh = self.store.refresh_token().await?.ok_or_else(|| ApiError::Auth {
            status: StatusCode::UNAUTHORIZED.as_u16(),
            message: "No refresh token stored".into(),
            body: None,
        })?;

        let url = self.url(TOKEN_REFRESH_PATH);
        let builder =
            self.http_client.request(Method::POST, &url).json(&RefreshRequest { refresh });
        let response = self.transmit(builder).await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response, &url).await);
        }

        let tokens: RefreshResponse = Self::decode(response).await?;
        self.store.store_access_token(&tokens.access).await?;
        if let Some(rotated) = tokens.refresh.as_deref() {
            self.store.store_refresh_token(rotated).await?;
        }

        info!("access token refreshed");
        Ok(())
    }

    async fn end_session(&self) {
        if let Err(err) = self.store.clear().await {
            warn!(error = %err, "failed to clear credentials after refresh failure");
        }
        self.navigator.redirect_to_landing();
    }

    async fn send_once(
        &self,
        request: &ApiRequest,
        url: &str,
        token: Option<&str>,
    ) -> Result<Response, ApiError> {
        let mut builder = self.http_client.request(request.method().clone(), url);

        if !request.query_pairs().is_empty() {
            builder = builder.query(request.query_pairs());
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        self.transmit(builder).await
    }

    async fn transmit(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let timeout = self.config.timeout;
        match tokio::time::timeout(timeout, self.http_client.send(builder)).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(err)) => Err(ApiError::from(err)),
            Err(_) => Err(ApiError::Timeout(timeout)),
        }
    }

    async fn decode<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
        let status = response.status();

        // 204/205 carry no body by RFC; empty 200s are treated the same way
        let bytes = if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            Vec::new()
        } else {
            response
                .bytes()
                .await
                .map_err(|e| ApiError::Network(format!("Failed to read response body: {e}")))?
                .to_vec()
        };

        if bytes.is_empty() {
            return serde_json::from_value(Value::Null).map_err(|_| {
                ApiError::Decode(format!(
                    "Empty response ({}), but response type cannot be deserialized from empty body",
                    status.as_u16()
                ))
            });
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::Decode(format!("Failed to parse response: {e}")))
    }

    async fn status_error(response: Response, url: &str) -> ApiError {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        map_status_error(status, url, &text)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

fn map_status_error(status: StatusCode, url: &str, text: &str) -> ApiError {
    let message = if text.is_empty() {
        format!("{url} returned status {status}")
    } else {
        format!("{url} returned status {status}: {text}")
    };
    let body = serde_json::from_str::<Value>(text).ok();
    let code = status.as_u16();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        ApiError::Auth { status: code, message, body }
    } else if status == StatusCode::TOO_MANY_REQUESTS {
        ApiError::RateLimit(message)
    } else if status.is_server_error() {
        ApiError::Server { status: code, message }
    } else if status.is_client_error() {
        ApiError::Client { status: code, message, body }
    } else {
        ApiError::Network(message)
    }
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    store: Option<Arc<dyn TokenStore>>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl ApiClientBuilder {
    /// Set the API configuration
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the credential store read by the interceptors
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the navigator told about unrecoverable sessions
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if no token store was set or client creation fails
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let store =
            self.store.ok_or_else(|| ApiError::Config("Token store not set".to_string()))?;
        let navigator = self.navigator.unwrap_or_else(|| Arc::new(NoopNavigator));

        ApiClient::new(config, store, navigator)
    }
}
