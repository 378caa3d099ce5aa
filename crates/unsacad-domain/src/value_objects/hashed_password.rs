//! Hashed password value object.

use crate::errors::{IamError, IamResult};
use std::fmt;
use unsacad_kernel::{Guard, ValueObject};

const MIN_LENGTH: usize = 20;

/// An already-hashed password string.
///
/// The domain never sees plaintext passwords; hashing happens in the
/// security layer before construction. The length floor rejects values
/// that obviously cannot be a real hash (truncation, accidental
/// plaintext of a short password).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Validates a raw hash string.
    pub fn new(raw: &str) -> IamResult<Self> {
        let trimmed = raw.trim();
        if Guard::is_short(trimmed, MIN_LENGTH) {
            return Err(IamError::InvalidPasswordHash(format!(
                "must be at least {MIN_LENGTH} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Wraps an already-validated hash without re-checking.
    #[must_use]
    pub const fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    /// Returns the hash as a string slice.
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

impl ValueObject for HashedPassword {}

// Keeps hash material out of debug output and logs.
impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashedPassword(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$hashhashhash";

    #[test]
    fn test_accepts_real_hash() {
        let hash = HashedPassword::new(SAMPLE_HASH).unwrap();
        assert_eq!(hash.as_str(), SAMPLE_HASH);
    }

    #[test]
    fn test_rejects_short_values() {
        assert!(matches!(
            HashedPassword::new("plaintext"),
            Err(IamError::InvalidPasswordHash(_))
        ));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let hash = HashedPassword::new(SAMPLE_HASH).unwrap();
        assert_eq!(format!("{hash:?}"), "HashedPassword(***)");
    }
}
