//! Shared request plumbing for the resource clients.
//!
//! Every client in this crate funnels through [`ApiClient`]: one
//! `reqwest::Client`, the configured base URL, and the token store. The
//! bearer header is rebuilt from the store on every authorized call, never
//! cached, so a token rotation (or sign-out) takes effect on the next
//! request.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::token::TokenStore;

/// Whether a request carries the bearer header.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Auth {
    /// No Authorization header.
    Public,
    /// `Authorization: Bearer <token>` built from the token store. When the
    /// store is empty the request goes out without the header; the backend
    /// rejects it the same way it rejects a bad token.
    Bearer,
}

/// Shared transport handle.
///
/// Cheap to clone; all clones use the same connection pool and token store.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a new transport handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.base_url.trim_end_matches('/').to_string(),
                tokens,
            }),
        })
    }

    /// The configured base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub(crate) fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.inner.tokens
    }

    // =========================================================================
    // Request helpers
    // =========================================================================

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        auth: Auth,
    ) -> Result<T, ApiError> {
        let request = self.inner.client.get(self.url(path));
        self.send(request, auth).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        auth: Auth,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.inner.client.post(self.url(path)).json(body);
        self.send(request, auth).await
    }

    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        auth: Auth,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.inner.client.patch(self.url(path)).json(body);
        self.send(request, auth).await
    }

    pub(crate) async fn delete(&self, path: &str, auth: Auth) -> Result<(), ApiError> {
        let request = self.inner.client.delete(self.url(path));
        let response = self.authorize(request, auth).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(status_error(status, response).await)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Attach the bearer header for authorized requests.
    ///
    /// The token is read from the store here, per request. A store read
    /// failure degrades to an unauthenticated request rather than blocking
    /// the call.
    fn authorize(&self, request: reqwest::RequestBuilder, auth: Auth) -> reqwest::RequestBuilder {
        match auth {
            Auth::Public => request,
            Auth::Bearer => match self.inner.tokens.get() {
                Ok(Some(token)) => request.header(
                    reqwest::header::AUTHORIZATION,
                    format!("Bearer {}", token.expose_secret()),
                ),
                Ok(None) => request,
                Err(e) => {
                    warn!(error = %e, "token store read failed; sending request unauthenticated");
                    request
                }
            },
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        auth: Auth,
    ) -> Result<T, ApiError> {
        let response = self.authorize(request, auth).send().await?;

        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(ApiError::from);
        }
        Err(status_error(status, response).await)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

/// Turn a non-success response into `ApiError::Status`, keeping the body.
async fn status_error(status: reqwest::StatusCode, response: reqwest::Response) -> ApiError {
    let body = response.text().await.unwrap_or_default();
    error!(
        status = status.as_u16(),
        body = %body.chars().take(200).collect::<String>(),
        "backend returned non-success status"
    );
    ApiError::Status {
        status: status.as_u16(),
        body,
    }
}
