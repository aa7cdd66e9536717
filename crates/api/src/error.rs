//! Error types for the API client.

use thiserror::Error;

/// Errors that can occur when calling the resource endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    ///
    /// The body is kept verbatim; nothing is retried or translated at this
    /// layer.
    #[error("API error: {status} - {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },
}

impl ApiError {
    /// The `message` field of a structured JSON error body, if there is one.
    ///
    /// This is what the screens show to the user before falling back to a
    /// hardcoded Vietnamese default.
    #[must_use]
    pub fn server_message(&self) -> Option<String> {
        match self {
            Self::Http(_) => None,
            Self::Status { body, .. } => serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .as_ref()
                .and_then(|data| data.get("message"))
                .and_then(serde_json::Value::as_str)
                .filter(|message| !message.is_empty())
                .map(String::from),
        }
    }

    /// The HTTP status code, when the backend answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(_) => None,
            Self::Status { status, .. } => Some(*status),
        }
    }
}

/// Errors from the auth endpoints.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Backend rejected the request. The message is user-facing, already
    /// localized where a code mapping exists.
    #[error("{0}")]
    Rejected(String),

    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

// =============================================================================
// Error message extraction
// =============================================================================

/// Backend error codes translated for the login flow.
pub const LOGIN_CODE_MAP: &[(&str, &str)] = &[
    ("INVALID_CREDENTIALS", "Thông tin đăng nhập không hợp lệ"),
    ("EMAIL_ALREADY_REGISTERED", "Email đã được đăng ký"),
];

/// Backend error codes translated for the register flow.
pub const REGISTER_CODE_MAP: &[(&str, &str)] =
    &[("EMAIL_ALREADY_REGISTERED", "Email đã được đăng ký")];

/// Turn a non-success response body into a user-facing message.
///
/// Resolution order:
/// 1. JSON body whose `code` appears in `code_map` wins; any accompanying
///    `message` is ignored.
/// 2. JSON body with a non-empty string `message` is shown verbatim.
/// 3. A body that is not valid JSON and not empty is shown as-is.
/// 4. Otherwise the hardcoded `fallback`.
///
/// A JSON body carrying neither a mapped code nor a message falls through to
/// the fallback, not to the raw text.
#[must_use]
pub fn extract_error_message(body: &str, code_map: &[(&str, &str)], fallback: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(data) => {
            if let Some(code) = data.get("code").and_then(serde_json::Value::as_str)
                && let Some((_, mapped)) = code_map.iter().find(|(known, _)| *known == code)
            {
                return (*mapped).to_string();
            }
            match data.get("message").and_then(serde_json::Value::as_str) {
                Some(message) if !message.is_empty() => message.to_string(),
                _ => fallback.to_string(),
            }
        }
        Err(_) if !body.is_empty() => body.to_string(),
        Err(_) => fallback.to_string(),
    }
}
