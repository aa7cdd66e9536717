//! `/order` endpoints and the order draft.
//!
//! Orders are immutable once placed, so the client only exposes create,
//! list, and get. [`OrderDraft`] owns the cart arithmetic: it validates
//! lines as they are added and computes the total with checked arithmetic
//! so the submitted payload always matches its own items.

use quanngon_core::{MenuItemId, OrderId, OrderStatus, Price, UserId};
use tracing::instrument;

use crate::error::ApiError;
use crate::http::{ApiClient, Auth};
use crate::types::{MenuItem, NewOrder, NewOrderLine, Order};

/// Client for the order endpoints. Every call carries the bearer token;
/// the backend scopes reads to the signed-in user (admins see all).
#[derive(Debug, Clone)]
pub struct OrderClient {
    api: ApiClient,
}

impl OrderClient {
    pub(crate) const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// POST `/order`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self, order), fields(lines = order.items.len()))]
    pub async fn create(&self, order: &NewOrder) -> Result<Order, ApiError> {
        self.api.post("/order", Auth::Bearer, order).await
    }

    /// GET `/order`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Order>, ApiError> {
        self.api.get("/order", Auth::Bearer).await
    }

    /// GET `/order/{id}`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get(&self, id: &OrderId) -> Result<Order, ApiError> {
        self.api.get(&format!("/order/{id}"), Auth::Bearer).await
    }
}

// =============================================================================
// Order draft
// =============================================================================

/// A rejected draft operation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OrderDraftError {
    #[error("menu item {0} is not available for ordering")]
    Unavailable(MenuItemId),
    #[error("quantity must be at least 1")]
    ZeroQuantity,
    #[error("draft has no items")]
    Empty,
    #[error("order total overflows")]
    TotalOverflow,
}

#[derive(Debug, Clone)]
struct DraftLine {
    item: MenuItemId,
    unit_price: Price,
    quantity: u32,
}

/// An order under construction.
///
/// Lines reference menu items by id but capture the unit price at add
/// time, so the total sent to the backend reflects the prices the user
/// saw. Unavailable items and zero quantities are rejected on `add`.
#[derive(Debug, Clone, Default)]
pub struct OrderDraft {
    lines: Vec<DraftLine>,
}

impl OrderDraft {
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add `quantity` of `item` as a new line.
    ///
    /// # Errors
    ///
    /// `Unavailable` if the item is marked off-menu, `ZeroQuantity` for a
    /// zero count.
    pub fn add(&mut self, item: &MenuItem, quantity: u32) -> Result<(), OrderDraftError> {
        if !item.available {
            return Err(OrderDraftError::Unavailable(item.id.clone()));
        }
        if quantity == 0 {
            return Err(OrderDraftError::ZeroQuantity);
        }
        self.lines.push(DraftLine {
            item: item.id.clone(),
            unit_price: item.price,
            quantity,
        });
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of unit price times quantity over all lines.
    ///
    /// # Errors
    ///
    /// `TotalOverflow` if any multiplication or the running sum overflows.
    pub fn total(&self) -> Result<Price, OrderDraftError> {
        self.lines.iter().try_fold(Price::ZERO, |sum, line| {
            line.unit_price
                .checked_mul(line.quantity)
                .and_then(|line_total| sum.checked_add(line_total))
                .ok_or(OrderDraftError::TotalOverflow)
        })
    }

    /// Turn the draft into a `POST /order` body for `user`. Orders are
    /// submitted already confirmed; there is no separate checkout step.
    ///
    /// # Errors
    ///
    /// `Empty` for a draft with no lines, `TotalOverflow` from the total.
    pub fn build(
        &self,
        user: UserId,
        delivery_address: Option<String>,
    ) -> Result<NewOrder, OrderDraftError> {
        if self.lines.is_empty() {
            return Err(OrderDraftError::Empty);
        }
        let total = self.total()?;
        let items = self
            .lines
            .iter()
            .map(|line| NewOrderLine {
                menu: line.item.clone(),
                quantity: line.quantity,
            })
            .collect();

        Ok(NewOrder {
            user,
            items,
            total,
            status: Some(OrderStatus::Confirmed),
            delivery_address,
        })
    }
}
