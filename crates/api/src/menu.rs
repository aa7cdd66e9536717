//! `/menu` endpoints.

use quanngon_core::MenuItemId;
use tracing::instrument;

use crate::error::ApiError;
use crate::http::{ApiClient, Auth};
use crate::types::{MenuItem, MenuItemPatch, NewMenuItem};

/// Client for the menu endpoints. Reads are public; writes carry the
/// bearer token and are rejected by the backend for non-admin accounts.
#[derive(Debug, Clone)]
pub struct MenuClient {
    api: ApiClient,
}

impl MenuClient {
    pub(crate) const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// GET `/menu`. Returns every item, including unavailable ones;
    /// callers filter for display.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<MenuItem>, ApiError> {
        self.api.get("/menu", Auth::Public).await
    }

    /// GET `/menu/{id}`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get(&self, id: &MenuItemId) -> Result<MenuItem, ApiError> {
        self.api.get(&format!("/menu/{id}"), Auth::Public).await
    }

    /// POST `/menu`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self, item))]
    pub async fn create(&self, item: &NewMenuItem) -> Result<MenuItem, ApiError> {
        self.api.post("/menu", Auth::Bearer, item).await
    }

    /// PATCH `/menu/{id}`. Only the fields set on the patch are sent.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self, patch), fields(id = %id))]
    pub async fn update(
        &self,
        id: &MenuItemId,
        patch: &MenuItemPatch,
    ) -> Result<MenuItem, ApiError> {
        self.api
            .patch(&format!("/menu/{id}"), Auth::Bearer, patch)
            .await
    }

    /// DELETE `/menu/{id}`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: &MenuItemId) -> Result<(), ApiError> {
        self.api.delete(&format!("/menu/{id}"), Auth::Bearer).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use quanngon_core::Price;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::ApiConfig;
    use crate::token::MemoryTokenStore;

    async fn menu_client(server: &MockServer) -> MenuClient {
        let config = ApiConfig {
            base_url: server.uri(),
            token_file: std::path::PathBuf::new(),
            timeout: Duration::from_secs(5),
        };
        MenuClient::new(ApiClient::new(&config, Arc::new(MemoryTokenStore::new())).unwrap())
    }

    #[tokio::test]
    async fn test_get_parses_populated_category() {
        let server = MockServer::start().await;
        let client = menu_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/menu/m1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "_id": "m1",
                "category": {"_id": "c1", "name": "Món chính"},
                "name": "Phở bò",
                "price": 50000,
                "available": true,
                "createdAt": "2025-03-01T10:00:00.000Z",
                "updatedAt": "2025-03-01T10:00:00.000Z"
            })))
            .mount(&server)
            .await;

        let item = client.get(&MenuItemId::from("m1")).await.unwrap();
        assert_eq!(item.name, "Phở bò");
        assert_eq!(item.category.name, "Món chính");
        assert_eq!(item.price, Price::new(50_000));
    }

    #[tokio::test]
    async fn test_update_availability_only() {
        let server = MockServer::start().await;
        let client = menu_client(&server).await;

        Mock::given(method("PATCH"))
            .and(path("/menu/m1"))
            .and(body_json(serde_json::json!({"available": false})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "_id": "m1",
                "category": {"_id": "c1", "name": "Món chính"},
                "name": "Phở bò",
                "price": 50000,
                "available": false,
                "createdAt": "2025-03-01T10:00:00.000Z",
                "updatedAt": "2025-03-04T10:00:00.000Z"
            })))
            .mount(&server)
            .await;

        let patch = MenuItemPatch {
            available: Some(false),
            ..MenuItemPatch::default()
        };
        let updated = client.update(&MenuItemId::from("m1"), &patch).await.unwrap();
        assert!(!updated.available);
    }

    #[tokio::test]
    async fn test_list_surfaces_backend_error() {
        let server = MockServer::start().await;
        let client = menu_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/menu"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({"message": "Internal error"})),
            )
            .mount(&server)
            .await;

        let err = client.list().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.server_message().as_deref(), Some("Internal error"));
    }
}
