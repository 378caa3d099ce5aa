//! Account activation flag.

use serde::{Deserialize, Serialize};
use unsacad_kernel::ValueObject;

/// Whether a user account is active.
///
/// Replaced wholesale on activation changes; the aggregate owns the
/// transition rules (activating an active account is a domain error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveFlag(bool);

impl ActiveFlag {
    /// An active account.
    #[must_use]
    pub const fn active() -> Self {
        Self(true)
    }

    /// An inactive account.
    #[must_use]
    pub const fn inactive() -> Self {
        Self(false)
    }

    /// Wraps a stored flag value.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        Self(value)
    }

    /// Returns the inner flag.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.0
    }
}

impl ValueObject for ActiveFlag {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert!(ActiveFlag::active().is_active());
        assert!(!ActiveFlag::inactive().is_active());
        assert_eq!(ActiveFlag::from_bool(true), ActiveFlag::active());
    }
}
