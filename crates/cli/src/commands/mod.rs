//! Command handlers for the `qn` binary.

use quanngon_api::error::{ApiError, AuthError};
use quanngon_api::orders::OrderDraftError;
use quanngon_api::token::TokenStoreError;
use thiserror::Error;

pub mod admin;
pub mod auth;
pub mod category;
pub mod home;
pub mod menu;
pub mod order;

/// Errors surfaced by the command handlers.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Authentication rejection carrying its user-facing message.
    #[error("{0}")]
    Auth(#[from] AuthError),

    /// Localized message mirroring the web client's alert texts.
    #[error("{0}")]
    Message(String),

    /// Order draft validation failure.
    #[error(transparent)]
    Draft(#[from] OrderDraftError),

    /// Token store read or write failure.
    #[error(transparent)]
    TokenStore(#[from] TokenStoreError),

    /// Terminal prompt failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Turn a backend error into the message the web pages would show: the
/// server's own `message` field when present, the localized fallback
/// otherwise (which also covers transport failures).
pub(crate) fn localized(error: &ApiError, fallback: &str) -> CommandError {
    CommandError::Message(
        error
            .server_message()
            .unwrap_or_else(|| fallback.to_string()),
    )
}
