//! Order lifecycle states.

use serde::{Deserialize, Serialize};

/// Lifecycle state of an order.
///
/// New orders are created as [`OrderStatus::Confirmed`]; the kitchen moves
/// them forward (or cancels) from there. Wire values are lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Received but not yet acknowledged by staff.
    Pending,
    /// Acknowledged and queued for preparation.
    Confirmed,
    /// Handed over to the customer.
    Delivered,
    /// Cancelled by staff or customer.
    Cancelled,
}

impl OrderStatus {
    /// The backend wire string for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Vietnamese display label, as shown on order badges.
    #[must_use]
    pub const fn label_vi(self) -> &'static str {
        match self {
            Self::Pending => "Chờ xử lý",
            Self::Confirmed => "Đã xác nhận",
            Self::Delivered => "Đã giao",
            Self::Cancelled => "Đã hủy",
        }
    }

    /// Whether the order is still in flight (not delivered or cancelled).
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}
