//! Person name value object.

use crate::errors::{IamError, IamResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use unsacad_kernel::{Guard, ValueObject};

const MIN_LENGTH: usize = 2;

/// A first or last name, normalized to uppercase.
///
/// Accepts letters, apostrophes, hyphens, and internal spaces; the stored
/// form is trimmed and uppercased so names compare and print uniformly
/// across records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    /// Validates and normalizes a raw name.
    pub fn new(raw: &str) -> IamResult<Self> {
        let trimmed = raw.trim();
        if Guard::is_short(trimmed, MIN_LENGTH) {
            return Err(IamError::InvalidName(format!(
                "must be at least {MIN_LENGTH} characters"
            )));
        }
        let valid = trimmed
            .chars()
            .all(|c| c.is_alphabetic() || c == '\'' || c == '-' || c == ' ');
        if !valid {
            return Err(IamError::InvalidName(
                "may only contain letters, apostrophes, hyphens and spaces".to_string(),
            ));
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    /// Wraps an already-validated name without re-checking.
    #[must_use]
    pub const fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    /// Returns the name as a string slice.
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

impl ValueObject for PersonName {}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
