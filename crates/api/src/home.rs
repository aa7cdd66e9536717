//! Public landing-page data.
//!
//! The landing page must render even when the backend is down, so unlike
//! the other clients these calls swallow failures: featured dishes fall
//! back to an empty list and the stat counters to zero, with the error
//! logged.

use tracing::{instrument, warn};

use crate::error::ApiError;
use crate::http::{ApiClient, Auth};
use crate::types::{HomeStats, MenuItem};

/// Default number of dishes for the featured strip.
pub const DEFAULT_FEATURED_LIMIT: usize = 3;

/// Client for the public landing-page queries. No call here ever attaches
/// the bearer token.
#[derive(Debug, Clone)]
pub struct HomeClient {
    api: ApiClient,
}

impl HomeClient {
    pub(crate) const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// The first `limit` available dishes, in backend order. Unavailable
    /// dishes are skipped before the limit is applied.
    #[instrument(skip(self))]
    pub async fn featured_menus(&self, limit: usize) -> Vec<MenuItem> {
        let menus: Result<Vec<MenuItem>, ApiError> = self.api.get("/menu", Auth::Public).await;
        match menus {
            Ok(menus) => menus
                .into_iter()
                .filter(|menu| menu.available)
                .take(limit)
                .collect(),
            Err(e) => {
                warn!(error = %e, "failed to fetch featured menus; showing none");
                Vec::new()
            }
        }
    }

    /// Collection counts for the landing-page stat cards. The three
    /// collections are fetched concurrently; if any fails, all counters
    /// come back zero.
    #[instrument(skip(self))]
    pub async fn stats(&self) -> HomeStats {
        match self.fetch_stats().await {
            Ok(stats) => stats,
            Err(e) => {
                warn!(error = %e, "failed to fetch home stats; showing zeros");
                HomeStats::default()
            }
        }
    }

    async fn fetch_stats(&self) -> Result<HomeStats, ApiError> {
        // Only the lengths matter, so the payloads stay untyped.
        let menus = self.api.get::<Vec<serde_json::Value>>("/menu", Auth::Public);
        let categories = self
            .api
            .get::<Vec<serde_json::Value>>("/category", Auth::Public);
        let reviews = self
            .api
            .get::<Vec<serde_json::Value>>("/review", Auth::Public);

        let (menus, categories, reviews) = tokio::join!(menus, categories, reviews);

        Ok(HomeStats {
            total_menus: menus?.len(),
            total_categories: categories?.len(),
            total_reviews: reviews?.len(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::ApiConfig;
    use crate::token::{MemoryTokenStore, TokenStore};

    async fn home_client(server: &MockServer) -> HomeClient {
        // A token is present, but home calls must never send it.
        let store = Arc::new(MemoryTokenStore::new());
        store.set("tok").unwrap();
        let config = ApiConfig {
            base_url: server.uri(),
            token_file: std::path::PathBuf::new(),
            timeout: Duration::from_secs(5),
        };
        HomeClient::new(ApiClient::new(&config, store).unwrap())
    }

    fn menu_json(id: &str, available: bool) -> serde_json::Value {
        serde_json::json!({
            "_id": id,
            "category": {"_id": "c1", "name": "Món chính"},
            "name": format!("dish {id}"),
            "price": 50000,
            "available": available,
            "createdAt": "2025-03-01T10:00:00.000Z",
            "updatedAt": "2025-03-01T10:00:00.000Z"
        })
    }

    #[tokio::test]
    async fn test_featured_filters_before_limiting() {
        let server = MockServer::start().await;
        let client = home_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/menu"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                menu_json("m1", true),
                menu_json("m2", false),
                menu_json("m3", true),
                menu_json("m4", true),
                menu_json("m5", true)
            ])))
            .mount(&server)
            .await;

        let featured = client.featured_menus(DEFAULT_FEATURED_LIMIT).await;
        let ids: Vec<&str> = featured.iter().map(|m| m.id.as_str()).collect();
        // m2 is skipped, then the limit cuts at three. No reordering.
        assert_eq!(ids, ["m1", "m3", "m4"]);

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_featured_swallows_backend_failure() {
        let server = MockServer::start().await;
        let client = home_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/menu"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        assert!(client.featured_menus(3).await.is_empty());
    }

    #[tokio::test]
    async fn test_stats_counts_public_collections() {
        let server = MockServer::start().await;
        let client = home_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/menu"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                menu_json("m1", true),
                menu_json("m2", false)
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/category"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!([{"_id": "c1"}])),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/review"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let stats = client.stats().await;
        assert_eq!(
            stats,
            HomeStats {
                total_menus: 2,
                total_categories: 1,
                total_reviews: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_stats_zeroes_everything_on_any_failure() {
        let server = MockServer::start().await;
        let client = home_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/menu"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!([{"_id": "m1"}])),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/category"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!([{"_id": "c1"}])),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/review"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        assert_eq!(client.stats().await, HomeStats::default());
    }
}
