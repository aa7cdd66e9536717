//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `QUANNGON_API_BASE_URL` - Backend base URL (default: `http://localhost:1111`)
//! - `QUANNGON_TOKEN_FILE` - Token file path (default: `$HOME/.quanngon/token`)
//! - `QUANNGON_HTTP_TIMEOUT_SECS` - Per-request timeout in seconds (default: 30)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Development default; the deployed backend is injected via
/// `QUANNGON_API_BASE_URL`.
pub const DEFAULT_BASE_URL: &str = "http://localhost:1111";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("No home directory found; set QUANNGON_TOKEN_FILE explicitly")]
    NoHomeDir,
}

/// API client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend base URL, without a trailing slash.
    pub base_url: String,
    /// Where the bearer token is persisted between runs.
    pub token_file: PathBuf,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL does not parse, the timeout is
    /// not a number, or no token file location can be resolved.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url =
            normalize_base_url(&get_env_or_default("QUANNGON_API_BASE_URL", DEFAULT_BASE_URL))?;

        let token_file = match get_optional_env("QUANNGON_TOKEN_FILE") {
            Some(path) => PathBuf::from(path),
            None => default_token_file()?,
        };

        let timeout_secs = get_optional_env("QUANNGON_HTTP_TIMEOUT_SECS")
            .map_or(Ok(DEFAULT_TIMEOUT_SECS), |raw| {
                raw.parse::<u64>().map_err(|e| {
                    ConfigError::InvalidEnvVar(
                        "QUANNGON_HTTP_TIMEOUT_SECS".to_string(),
                        e.to_string(),
                    )
                })
            })?;

        Ok(Self {
            base_url,
            token_file,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Trim trailing slashes and reject values that are not URLs at all.
fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim_end_matches('/');
    url::Url::parse(trimmed).map_err(|e| {
        ConfigError::InvalidEnvVar("QUANNGON_API_BASE_URL".to_string(), e.to_string())
    })?;
    Ok(trimmed.to_string())
}

/// `$HOME/.quanngon/token`, the localStorage analog for a CLI process.
fn default_token_file() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".quanngon").join("token"))
        .ok_or(ConfigError::NoHomeDir)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_trims_trailing_slash() {
        assert_eq!(
            normalize_base_url("http://localhost:1111/").unwrap(),
            "http://localhost:1111"
        );
        assert_eq!(
            normalize_base_url("https://api.quanngon.vn///").unwrap(),
            "https://api.quanngon.vn"
        );
    }

    #[test]
    fn test_normalize_base_url_keeps_clean_value() {
        assert_eq!(
            normalize_base_url(DEFAULT_BASE_URL).unwrap(),
            "http://localhost:1111"
        );
    }

    #[test]
    fn test_normalize_base_url_rejects_garbage() {
        assert!(normalize_base_url("not a url").is_err());
        assert!(normalize_base_url("").is_err());
    }
}
