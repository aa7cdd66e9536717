//! `/users` endpoints (admin back-office account management).

use quanngon_core::UserId;
use tracing::instrument;

use crate::error::ApiError;
use crate::http::{ApiClient, Auth};
use crate::types::{NewUser, User, UserPatch};

/// Client for the user-management endpoints. All calls carry the bearer
/// token; the backend restricts them to admin accounts.
#[derive(Debug, Clone)]
pub struct UserClient {
    api: ApiClient,
}

impl UserClient {
    pub(crate) const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// GET `/users`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        self.api.get("/users", Auth::Bearer).await
    }

    /// GET `/users/{id}`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get(&self, id: &UserId) -> Result<User, ApiError> {
        self.api.get(&format!("/users/{id}"), Auth::Bearer).await
    }

    /// POST `/users`. Unlike self-service registration, the role is caller
    /// supplied, so admins can provision staff accounts.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn create(&self, user: &NewUser) -> Result<User, ApiError> {
        self.api.post("/users", Auth::Bearer, user).await
    }

    /// PATCH `/users/{id}`. Only the fields set on the patch are sent.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self, patch), fields(id = %id))]
    pub async fn update(&self, id: &UserId, patch: &UserPatch) -> Result<User, ApiError> {
        self.api
            .patch(&format!("/users/{id}"), Auth::Bearer, patch)
            .await
    }

    /// DELETE `/users/{id}`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: &UserId) -> Result<(), ApiError> {
        self.api.delete(&format!("/users/{id}"), Auth::Bearer).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use quanngon_core::Role;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::ApiConfig;
    use crate::token::{MemoryTokenStore, TokenStore};

    async fn user_client(server: &MockServer) -> UserClient {
        let store = Arc::new(MemoryTokenStore::new());
        store.set("admin-token").unwrap();
        let config = ApiConfig {
            base_url: server.uri(),
            token_file: std::path::PathBuf::new(),
            timeout: Duration::from_secs(5),
        };
        UserClient::new(ApiClient::new(&config, store).unwrap())
    }

    #[tokio::test]
    async fn test_create_staff_account_keeps_role() {
        let server = MockServer::start().await;
        let client = user_client(&server).await;

        Mock::given(method("POST"))
            .and(path("/users"))
            .and(body_json(serde_json::json!({
                "name": "Minh",
                "email": "minh@example.com",
                "phone": "0987654321",
                "password": "secret1",
                "role": "adm"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "_id": "u2",
                "name": "Minh",
                "email": "minh@example.com",
                "phone": "0987654321",
                "role": "adm",
                "createdAt": "2025-03-01T10:00:00.000Z",
                "updatedAt": "2025-03-01T10:00:00.000Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let user = client
            .create(&NewUser {
                name: "Minh".to_string(),
                email: "minh@example.com".to_string(),
                phone: "0987654321".to_string(),
                password: "secret1".to_string(),
                role: Role::Admin,
                address: None,
            })
            .await
            .unwrap();
        assert!(user.role.is_admin());
    }

    #[tokio::test]
    async fn test_update_address_only() {
        let server = MockServer::start().await;
        let client = user_client(&server).await;

        Mock::given(method("PATCH"))
            .and(path("/users/u1"))
            .and(body_json(serde_json::json!({"address": "45 Trần Hưng Đạo"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "_id": "u1",
                "name": "Lan",
                "email": "lan@example.com",
                "phone": "0912345678",
                "role": "cus",
                "address": "45 Trần Hưng Đạo",
                "createdAt": "2025-03-01T10:00:00.000Z",
                "updatedAt": "2025-03-07T10:00:00.000Z"
            })))
            .mount(&server)
            .await;

        let patch = UserPatch {
            address: Some("45 Trần Hưng Đạo".to_string()),
            ..UserPatch::default()
        };
        let updated = client.update(&UserId::from("u1"), &patch).await.unwrap();
        assert_eq!(updated.address.as_deref(), Some("45 Trần Hưng Đạo"));
    }
}
