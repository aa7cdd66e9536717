//! Vietnamese phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input does not start with +84 or 0.
    #[error("phone number must start with +84 or 0")]
    BadPrefix,
    /// The network digit after the prefix is not 3, 5, 7, 8, or 9.
    #[error("phone number network digit must be 3, 5, 7, 8, or 9")]
    BadNetworkDigit,
    /// The subscriber part is not exactly 8 digits.
    #[error("phone number must have exactly 8 digits after the network digit")]
    BadSubscriberPart,
}

/// A Vietnamese mobile phone number.
///
/// Validation follows the registration form's rule: a `+84` or `0` prefix,
/// a network digit in {3, 5, 7, 8, 9}, then exactly eight digits. The number
/// is stored verbatim (no normalization between the two prefix forms).
///
/// ## Examples
///
/// ```
/// use quanngon_core::Phone;
///
/// assert!(Phone::parse("0912345678").is_ok());
/// assert!(Phone::parse("+84912345678").is_ok());
///
/// assert!(Phone::parse("0112345678").is_err()); // bad network digit
/// assert!(Phone::parse("091234567").is_err());  // too short
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Network digits in service for Vietnamese mobile numbers.
    const NETWORK_DIGITS: [char; 5] = ['3', '5', '7', '8', '9'];

    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, has a prefix other than
    /// `+84`/`0`, a network digit outside {3, 5, 7, 8, 9}, or anything but
    /// eight digits after the network digit.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.is_empty() {
            return Err(PhoneError::Empty);
        }

        let rest = s
            .strip_prefix("+84")
            .or_else(|| s.strip_prefix('0'))
            .ok_or(PhoneError::BadPrefix)?;

        let mut chars = rest.chars();
        let network = chars.next().ok_or(PhoneError::BadNetworkDigit)?;
        if !Self::NETWORK_DIGITS.contains(&network) {
            return Err(PhoneError::BadNetworkDigit);
        }

        let subscriber: Vec<char> = chars.collect();
        if subscriber.len() != 8 || !subscriber.iter().all(char::is_ascii_digit) {
            return Err(PhoneError::BadSubscriberPart);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Phone` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
