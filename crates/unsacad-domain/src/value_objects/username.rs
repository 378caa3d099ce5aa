//! Username value object.

use crate::errors::{IamError, IamResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use unsacad_kernel::{Guard, ValueObject};

const MAX_LENGTH: usize = 50;

/// A login username: trimmed, non-blank, at most 50 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Validates and normalizes a raw username.
    pub fn new(raw: &str) -> IamResult<Self> {
        let trimmed = raw.trim();
        if Guard::is_blank(trimmed) {
            return Err(IamError::InvalidUsername("must not be blank".to_string()));
        }
        if Guard::is_long(trimmed, MAX_LENGTH) {
            return Err(IamError::InvalidUsername(format!(
                "must be at most {MAX_LENGTH} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Wraps an already-validated username without re-checking.
    #[must_use]
    pub const fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    /// Returns the username as a string slice.
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

impl ValueObject for Username {}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        let username = Username::new("  jdoe  ").unwrap();
        assert_eq!(username.as_str(), "jdoe");
    }

    #[test]
    fn test_rejects_blank() {
        assert!(matches!(
            Username::new("   "),
            Err(IamError::InvalidUsername(_))
        ));
    }

    #[test]
    fn test_rejects_too_long() {
        let raw = "x".repeat(51);
        assert!(matches!(
            Username::new(&raw),
            Err(IamError::InvalidUsername(_))
        ));
        assert!(Username::new(&"x".repeat(50)).is_ok());
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Username::new("jdoe").unwrap(), Username::new(" jdoe ").unwrap());
    }
}
