//! `/category` endpoints.

use quanngon_core::CategoryId;
use tracing::instrument;

use crate::error::ApiError;
use crate::http::{ApiClient, Auth};
use crate::types::{Category, CategoryPatch, NewCategory};

/// Client for the category endpoints. Reads are public; writes carry the
/// bearer token and are rejected by the backend for non-admin accounts.
#[derive(Debug, Clone)]
pub struct CategoryClient {
    api: ApiClient,
}

impl CategoryClient {
    pub(crate) const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// GET `/category`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Category>, ApiError> {
        self.api.get("/category", Auth::Public).await
    }

    /// GET `/category/{id}`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get(&self, id: &CategoryId) -> Result<Category, ApiError> {
        self.api.get(&format!("/category/{id}"), Auth::Public).await
    }

    /// POST `/category`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self, category))]
    pub async fn create(&self, category: &NewCategory) -> Result<Category, ApiError> {
        self.api.post("/category", Auth::Bearer, category).await
    }

    /// PATCH `/category/{id}`. Only the fields set on the patch are sent.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self, patch), fields(id = %id))]
    pub async fn update(
        &self,
        id: &CategoryId,
        patch: &CategoryPatch,
    ) -> Result<Category, ApiError> {
        self.api
            .patch(&format!("/category/{id}"), Auth::Bearer, patch)
            .await
    }

    /// DELETE `/category/{id}`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: &CategoryId) -> Result<(), ApiError> {
        self.api
            .delete(&format!("/category/{id}"), Auth::Bearer)
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::ApiConfig;
    use crate::token::{MemoryTokenStore, TokenStore};

    async fn category_client(server: &MockServer) -> CategoryClient {
        let store = Arc::new(MemoryTokenStore::new());
        store.set("admin-token").unwrap();
        let config = ApiConfig {
            base_url: server.uri(),
            token_file: std::path::PathBuf::new(),
            timeout: Duration::from_secs(5),
        };
        CategoryClient::new(ApiClient::new(&config, store).unwrap())
    }

    #[tokio::test]
    async fn test_list_is_public() {
        let server = MockServer::start().await;
        let client = category_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/category"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "_id": "c1",
                    "name": "Món chính",
                    "createdAt": "2025-03-01T10:00:00.000Z",
                    "updatedAt": "2025-03-01T10:00:00.000Z"
                }
            ])))
            .mount(&server)
            .await;

        let categories = client.list().await.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Món chính");

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_create_sends_bearer_and_body() {
        let server = MockServer::start().await;
        let client = category_client(&server).await;

        Mock::given(method("POST"))
            .and(path("/category"))
            .and(header("Authorization", "Bearer admin-token"))
            .and(body_json(serde_json::json!({"name": "Tráng miệng"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "_id": "c2",
                "name": "Tráng miệng",
                "createdAt": "2025-03-02T10:00:00.000Z",
                "updatedAt": "2025-03-02T10:00:00.000Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let created = client
            .create(&NewCategory {
                name: "Tráng miệng".to_string(),
                description: None,
            })
            .await
            .unwrap();
        assert_eq!(created.name, "Tráng miệng");
    }

    #[tokio::test]
    async fn test_update_sends_only_set_fields() {
        let server = MockServer::start().await;
        let client = category_client(&server).await;

        Mock::given(method("PATCH"))
            .and(path("/category/c1"))
            .and(body_json(serde_json::json!({"description": "Các món ăn chính"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "_id": "c1",
                "name": "Món chính",
                "description": "Các món ăn chính",
                "createdAt": "2025-03-01T10:00:00.000Z",
                "updatedAt": "2025-03-03T10:00:00.000Z"
            })))
            .mount(&server)
            .await;

        let patch = CategoryPatch {
            description: Some("Các món ăn chính".to_string()),
            ..CategoryPatch::default()
        };
        let updated = client
            .update(&CategoryId::from("c1"), &patch)
            .await
            .unwrap();
        assert_eq!(updated.description.as_deref(), Some("Các món ăn chính"));
    }

    #[tokio::test]
    async fn test_delete_category() {
        let server = MockServer::start().await;
        let client = category_client(&server).await;

        Mock::given(method("DELETE"))
            .and(path("/category/c9"))
            .and(header("Authorization", "Bearer admin-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Category deleted"
            })))
            .expect(1)
            .mount(&server)
            .await;

        client.delete(&CategoryId::from("c9")).await.unwrap();
    }
}
