//! Admin dashboard aggregates.
//!
//! The backend has no aggregate endpoints, so this client derives the
//! dashboard numbers the same way the back-office pages do: fetch the
//! collections and count or slice client-side.

use tracing::instrument;

use crate::error::ApiError;
use crate::http::{ApiClient, Auth};
use crate::types::{DashboardStats, MenuItem, Order, User};

/// Default number of records for the "recent" widgets.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Client for the derived admin dashboard data. Every call carries the
/// bearer token and requires an admin account.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    api: ApiClient,
}

impl DashboardClient {
    pub(crate) const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Collection counts for the dashboard header cards. The four
    /// collections are fetched concurrently; any failure fails the whole
    /// call.
    ///
    /// # Errors
    ///
    /// Returns the first `ApiError` among the four fetches.
    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<DashboardStats, ApiError> {
        let users = self.api.get::<Vec<User>>("/users", Auth::Bearer);
        let menus = self.api.get::<Vec<MenuItem>>("/menu", Auth::Bearer);
        let categories = self
            .api
            .get::<Vec<crate::types::Category>>("/category", Auth::Bearer);
        let orders = self.api.get::<Vec<Order>>("/order", Auth::Bearer);

        let (users, menus, categories, orders) = tokio::join!(users, menus, categories, orders);

        Ok(DashboardStats {
            total_users: users?.len(),
            total_menus: menus?.len(),
            total_categories: categories?.len(),
            total_orders: orders?.len(),
        })
    }

    /// The `limit` most recently created accounts, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self))]
    pub async fn recent_users(&self, limit: usize) -> Result<Vec<User>, ApiError> {
        let mut users: Vec<User> = self.api.get("/users", Auth::Bearer).await?;
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        users.truncate(limit);
        Ok(users)
    }

    /// The `limit` most recently placed orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self))]
    pub async fn recent_orders(&self, limit: usize) -> Result<Vec<Order>, ApiError> {
        let mut orders: Vec<Order> = self.api.get("/order", Auth::Bearer).await?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders.truncate(limit);
        Ok(orders)
    }

    /// The `limit` most recently added menu items, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self))]
    pub async fn recent_menus(&self, limit: usize) -> Result<Vec<MenuItem>, ApiError> {
        let mut menus: Vec<MenuItem> = self.api.get("/menu", Auth::Bearer).await?;
        menus.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        menus.truncate(limit);
        Ok(menus)
    }
}
