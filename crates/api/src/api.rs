//! The wired client set shared by every caller.

use std::sync::Arc;

use crate::auth::AuthClient;
use crate::categories::CategoryClient;
use crate::config::ApiConfig;
use crate::dashboard::DashboardClient;
use crate::error::ApiError;
use crate::home::HomeClient;
use crate::http::ApiClient;
use crate::menu::MenuClient;
use crate::orders::OrderClient;
use crate::reviews::ReviewClient;
use crate::token::TokenStore;
use crate::users::UserClient;

/// Entry point to the backend: one shared transport (connection pool, base
/// URL, token store) behind per-resource clients.
///
/// Cheaply cloneable; clones and the clients handed out by the accessors
/// all share the same transport, so a login through [`Api::auth`] is
/// visible to every other client immediately.
#[derive(Debug, Clone)]
pub struct Api {
    client: ApiClient,
}

impl Api {
    /// Wire up the transport against `config`, reading and writing bearer
    /// tokens through `tokens`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the underlying HTTP client cannot be built.
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        Ok(Self {
            client: ApiClient::new(config, tokens)?,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// The token store backing every authenticated request.
    #[must_use]
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        self.client.tokens()
    }

    #[must_use]
    pub fn auth(&self) -> AuthClient {
        AuthClient::new(self.client.clone())
    }

    #[must_use]
    pub fn categories(&self) -> CategoryClient {
        CategoryClient::new(self.client.clone())
    }

    #[must_use]
    pub fn menu(&self) -> MenuClient {
        MenuClient::new(self.client.clone())
    }

    #[must_use]
    pub fn orders(&self) -> OrderClient {
        OrderClient::new(self.client.clone())
    }

    #[must_use]
    pub fn reviews(&self) -> ReviewClient {
        ReviewClient::new(self.client.clone())
    }

    #[must_use]
    pub fn users(&self) -> UserClient {
        UserClient::new(self.client.clone())
    }

    #[must_use]
    pub fn dashboard(&self) -> DashboardClient {
        DashboardClient::new(self.client.clone())
    }

    #[must_use]
    pub fn home(&self) -> HomeClient {
        HomeClient::new(self.client.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::token::MemoryTokenStore;

    #[test]
    fn test_clients_share_one_token_store() {
        let store = Arc::new(MemoryTokenStore::new());
        store.set("tok").unwrap();
        let config = ApiConfig {
            base_url: "http://localhost:1111".to_string(),
            token_file: std::path::PathBuf::new(),
            timeout: Duration::from_secs(5),
        };
        let api = Api::new(&config, store.clone()).unwrap();

        // Logout through one handle is a store-level effect, so every
        // client wired to this Api sees it.
        api.auth().logout().unwrap();
        assert!(store.get().unwrap().is_none());
    }
}
