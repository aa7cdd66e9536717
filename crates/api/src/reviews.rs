//! `/review` endpoints.

use quanngon_core::ReviewId;
use tracing::instrument;

use crate::error::ApiError;
use crate::http::{ApiClient, Auth};
use crate::types::{NewReview, Review, ReviewPatch};

/// Client for the review endpoints. All calls carry the bearer token; the
/// backend enforces that only the author (or an admin) may edit or delete.
#[derive(Debug, Clone)]
pub struct ReviewClient {
    api: ApiClient,
}

impl ReviewClient {
    pub(crate) const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// GET `/review`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Review>, ApiError> {
        self.api.get("/review", Auth::Bearer).await
    }

    /// GET `/review/{id}`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get(&self, id: &ReviewId) -> Result<Review, ApiError> {
        self.api.get(&format!("/review/{id}"), Auth::Bearer).await
    }

    /// POST `/review`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self, review), fields(item = %review.item, rating = review.rating))]
    pub async fn create(&self, review: &NewReview) -> Result<Review, ApiError> {
        self.api.post("/review", Auth::Bearer, review).await
    }

    /// PATCH `/review/{id}`. Only the fields set on the patch are sent.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self, patch), fields(id = %id))]
    pub async fn update(&self, id: &ReviewId, patch: &ReviewPatch) -> Result<Review, ApiError> {
        self.api
            .patch(&format!("/review/{id}"), Auth::Bearer, patch)
            .await
    }

    /// DELETE `/review/{id}`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: &ReviewId) -> Result<(), ApiError> {
        self.api
            .delete(&format!("/review/{id}"), Auth::Bearer)
            .await
    }
}
