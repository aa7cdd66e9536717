//! Account roles.

use serde::{Deserialize, Serialize};

/// Account role with different permission levels.
///
/// The backend's wire values are the abbreviated `"cus"` / `"adm"` strings;
/// the variants carry the readable names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    /// A regular customer: browse, order, review.
    #[default]
    #[serde(rename = "cus")]
    Customer,
    /// Back-office staff: full CRUD over categories, menu, users, reviews.
    #[serde(rename = "adm")]
    Admin,
}

impl Role {
    /// Whether this role unlocks the admin console.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// The backend wire string for this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "cus",
            Self::Admin => "adm",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cus" => Ok(Self::Customer),
            "adm" => Ok(Self::Admin),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}
