//! `/auth` endpoints: login, register, profile, logout.
//!
//! The only persistent side effect in this module is the token store write
//! on a successful login (and the clear on logout). Everything else is
//! per-call: no session object, no token caching.

use quanngon_core::Role;
use serde::Serialize;
use tracing::{info, instrument};

use crate::error::{ApiError, AuthError, LOGIN_CODE_MAP, REGISTER_CODE_MAP, extract_error_message};
use crate::http::{ApiClient, Auth};
use crate::types::{LoginResponse, User, UserProfile};

const LOGIN_FALLBACK: &str = "Login failed";
const REGISTER_FALLBACK: &str = "Register failed";
const PROFILE_FALLBACK: &str = "Failed to fetch profile";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    password: &'a str,
    role: Role,
}

/// Client for the auth endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    api: ApiClient,
}

impl AuthClient {
    pub(crate) const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// POST `/auth/login`. On success the returned token is written to the
    /// token store before this call returns.
    ///
    /// # Errors
    ///
    /// `AuthError::Rejected` carries the user-facing message resolved from
    /// the response body (mapped code, server message, raw text, or the
    /// login fallback, in that order).
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError> {
        let body = LoginRequest { email, password };
        let response: LoginResponse = self
            .api
            .post("/auth/login", Auth::Public, &body)
            .await
            .map_err(|e| rejected(e, LOGIN_CODE_MAP, LOGIN_FALLBACK))?;

        if let Err(e) = self.api.tokens().set(&response.access_token) {
            // The backend accepted the credentials; a persistence failure
            // only means the session will not survive this process.
            tracing::warn!(error = %e, "failed to persist access token");
        }
        info!("login succeeded");

        Ok(response)
    }

    /// POST `/auth/register`. New accounts are always customers; staff
    /// accounts are provisioned through the users endpoint.
    ///
    /// # Errors
    ///
    /// `AuthError::Rejected` with the register fallback chain (only
    /// `EMAIL_ALREADY_REGISTERED` is translated here).
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let body = RegisterRequest {
            name,
            email,
            phone,
            password,
            role: Role::Customer,
        };
        self.api
            .post("/auth/register", Auth::Public, &body)
            .await
            .map_err(|e| rejected(e, REGISTER_CODE_MAP, REGISTER_FALLBACK))
    }

    /// GET `/auth/me` with the current bearer token.
    ///
    /// # Errors
    ///
    /// Any rejection (including a missing or stale token) comes back as
    /// `AuthError::Rejected` with the raw response text, or the profile
    /// fallback when the body is empty. Callers treat failure as "not
    /// signed in".
    #[instrument(skip(self))]
    pub async fn me(&self) -> Result<UserProfile, AuthError> {
        self.api
            .get("/auth/me", Auth::Bearer)
            .await
            .map_err(|e| match e {
                ApiError::Status { body, .. } if !body.is_empty() => AuthError::Rejected(body),
                ApiError::Status { .. } => AuthError::Rejected(PROFILE_FALLBACK.to_string()),
                ApiError::Http(e) => AuthError::Http(e),
            })
    }

    /// Drop the stored token. No network call; the backend keeps no
    /// session state to destroy.
    ///
    /// # Errors
    ///
    /// Returns an error only if the token store cannot be written.
    #[instrument(skip(self))]
    pub fn logout(&self) -> Result<(), crate::token::TokenStoreError> {
        self.api.tokens().clear()?;
        info!("logged out");
        Ok(())
    }
}

/// Map a transport error into the auth flow's user-facing form.
fn rejected(error: ApiError, code_map: &[(&str, &str)], fallback: &str) -> AuthError {
    match error {
        ApiError::Status { body, .. } => {
            AuthError::Rejected(extract_error_message(&body, code_map, fallback))
        }
        ApiError::Http(e) => AuthError::Http(e),
    }
}
