//! Type-safe VND price representation.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A price in Vietnamese đồng.
///
/// The backend sends prices as whole-đồng JSON numbers (VND has no minor
/// unit), so the wrapper is a plain `i64` serialized transparently. All
/// arithmetic is checked; totals that would overflow report `None` instead
/// of wrapping.
///
/// ## Examples
///
/// ```
/// use quanngon_core::Price;
///
/// let price = Price::new(50_000);
/// assert_eq!(price.checked_mul(3), Some(Price::new(150_000)));
/// assert_eq!(price.to_string(), "50.000 ₫");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Zero đồng.
    pub const ZERO: Self = Self(0);

    /// Create a new price from a whole-đồng amount.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the underlying amount in đồng.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Multiply by a quantity, or `None` on overflow.
    #[must_use]
    pub fn checked_mul(self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(i64::from(quantity)).map(Self)
    }

    /// Add another price, or `None` on overflow.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl From<Price> for i64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

/// Formats in the vi-VN style the ordering screens use: dot-separated
/// thousands with a trailing đồng sign, e.g. `1.250.000 ₫`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let negative = self.0 < 0;
        let digits = self.0.unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        let offset = digits.len() % 3;
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (i + 3 - offset) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }

        if negative {
            write!(f, "-{grouped} \u{20ab}")
        } else {
            write!(f, "{grouped} \u{20ab}")
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_mul() {
        assert_eq!(Price::new(50_000).checked_mul(3), Some(Price::new(150_000)));
        assert_eq!(Price::new(0).checked_mul(100), Some(Price::ZERO));
        assert_eq!(Price::new(i64::MAX).checked_mul(2), None);
    }

    #[test]
    fn test_checked_add() {
        let a = Price::new(30_000);
        let b = Price::new(45_000);
        assert_eq!(a.checked_add(b), Some(Price::new(75_000)));
        assert_eq!(Price::new(i64::MAX).checked_add(Price::new(1)), None);
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(Price::new(0).to_string(), "0 \u{20ab}");
        assert_eq!(Price::new(500).to_string(), "500 \u{20ab}");
        assert_eq!(Price::new(50_000).to_string(), "50.000 \u{20ab}");
        assert_eq!(Price::new(1_250_000).to_string(), "1.250.000 \u{20ab}");
        assert_eq!(Price::new(-50_000).to_string(), "-50.000 \u{20ab}");
    }

    #[test]
    fn test_serde_is_bare_number() {
        let price = Price::new(150_000);
        assert_eq!(serde_json::to_string(&price).unwrap(), "150000");
        let parsed: Price = serde_json::from_str("150000").unwrap();
        assert_eq!(parsed, price);
    }
}
