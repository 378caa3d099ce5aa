//! Email address value object.

use crate::errors::{IamError, IamResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use unsacad_kernel::{Guard, ValueObject};
use validator::ValidateEmail;

/// A normalized email address: trimmed, lowercased, format-checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validates and normalizes a raw email address.
    ///
    /// Normalization lowercases the whole address, so lookups and
    /// uniqueness checks are case-insensitive by construction.
    pub fn new(raw: &str) -> IamResult<Self> {
        let normalized = raw.trim().to_lowercase();
        if Guard::is_blank(&normalized) {
            return Err(IamError::InvalidEmail("must not be blank".to_string()));
        }
        if !normalized.validate_email() {
            return Err(IamError::InvalidEmail(format!(
                "'{normalized}' is not a valid email address"
            )));
        }
        Ok(Self(normalized))
    }

    /// Wraps an already-validated email without re-checking.
    #[must_use]
    pub const fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    /// Returns the email as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value object, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValueObject for EmailAddress {}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_lowercases() {
        let email = EmailAddress::new("J@Example.com ").unwrap();
        assert_eq!(email.as_str(), "j@example.com");
    }

    #[test]
    fn test_rejects_blank() {
        assert!(matches!(EmailAddress::new(""), Err(IamError::InvalidEmail(_))));
    }

    #[test]
    fn test_rejects_malformed() {
        for raw in ["not-an-email", "a@", "@example.com", "a b@example.com"] {
            assert!(
                matches!(EmailAddress::new(raw), Err(IamError::InvalidEmail(_))),
                "accepted {raw:?}"
            );
        }
    }

    #[test]
    fn test_round_trip_is_stable() {
        let email = EmailAddress::new("Student@Uni.edu").unwrap();
        let rebuilt = EmailAddress::new(email.as_str()).unwrap();
        assert_eq!(email, rebuilt);
    }
}
