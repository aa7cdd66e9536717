//! Integration tests for the Quán Ngon client.
//!
//! Every scenario under `tests/` drives the real `Api` facade over HTTP
//! against a wiremock server, so the suite is hermetic: no live backend,
//! no database, nothing beyond the loopback mock.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p quanngon-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `auth_flow` - Login, token persistence, session resume
//! - `order_flow` - Draft totals and order submission
//! - `admin_dashboard` - Stats, recent records, category round-trip
//!
//! Shared fixtures live here; the scenarios import them.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use quanngon_api::Api;
use quanngon_api::config::ApiConfig;
use quanngon_api::token::{FileTokenStore, MemoryTokenStore};
use serde_json::{Value, json};
use wiremock::MockServer;

/// Configuration pointing at the mock server. The token file path is unused
/// because the store is handed to `Api::new` directly.
#[must_use]
pub fn test_config(server: &MockServer) -> ApiConfig {
    ApiConfig {
        base_url: server.uri(),
        token_file: std::path::PathBuf::new(),
        timeout: Duration::from_secs(5),
    }
}

/// An `Api` holding its token in memory, pre-seeded when `token` is given.
///
/// # Panics
///
/// Panics when the HTTP client cannot be built.
#[must_use]
pub fn api_with_memory_store(server: &MockServer, token: Option<&str>) -> Api {
    let store = Arc::new(MemoryTokenStore::new());
    if let Some(token) = token {
        use quanngon_api::token::TokenStore;
        store.set(token).expect("memory store accepts the token");
    }
    Api::new(&test_config(server), store).expect("client builds")
}

/// An `Api` persisting its token to the given file, as the CLI runs it.
///
/// # Panics
///
/// Panics when the HTTP client cannot be built.
#[must_use]
pub fn api_with_token_file(server: &MockServer, token_file: &Path) -> Api {
    let store = Arc::new(FileTokenStore::new(token_file));
    Api::new(&test_config(server), store).expect("client builds")
}

/// Backend-shaped user record.
#[must_use]
pub fn user_json(id: &str, name: &str, role: &str, created_at: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "email": format!("{id}@example.com"),
        "phone": "0912345678",
        "role": role,
        "createdAt": created_at,
        "updatedAt": created_at,
    })
}

/// Backend-shaped menu item with an embedded category.
#[must_use]
pub fn menu_item_json(id: &str, name: &str, price: i64, available: bool) -> Value {
    json!({
        "_id": id,
        "category": {"_id": "c1", "name": "Món chính"},
        "name": name,
        "price": price,
        "available": available,
        "createdAt": "2024-05-01T10:00:00Z",
        "updatedAt": "2024-05-01T10:00:00Z",
    })
}

/// Backend-shaped category record.
#[must_use]
pub fn category_json(id: &str, name: &str, description: Option<&str>) -> Value {
    let mut value = json!({
        "_id": id,
        "name": name,
        "createdAt": "2024-05-01T10:00:00Z",
        "updatedAt": "2024-05-01T10:00:00Z",
    });
    if let (Some(description), Some(map)) = (description, value.as_object_mut()) {
        map.insert("description".to_string(), json!(description));
    }
    value
}

/// Backend-shaped order with a single line.
#[must_use]
pub fn order_json(id: &str, total: i64, status: &str, created_at: &str) -> Value {
    json!({
        "_id": id,
        "user": {"_id": "u1", "name": "Lan", "email": "lan@example.com"},
        "items": [{
            "menu": {"_id": "m1", "name": "Phở bò", "price": 50000},
            "quantity": 1,
        }],
        "total": total,
        "status": status,
        "createdAt": created_at,
        "updatedAt": created_at,
    })
}

/// The profile payload `GET /auth/me` returns.
#[must_use]
pub fn profile_json(id: &str, name: &str, role: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "email": format!("{id}@example.com"),
        "role": role,
    })
}
