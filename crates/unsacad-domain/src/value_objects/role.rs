//! User role value object.

use crate::errors::{IamError, IamResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unsacad_kernel::ValueObject;

/// Role of a user account within the university administration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Student,
    Teacher,
    Secretary,
    Admin,
}

impl UserRole {
    /// Canonical string form, matching the wire and storage encoding.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Teacher => "TEACHER",
            Self::Secretary => "SECRETARY",
            Self::Admin => "ADMIN",
        }
    }

    /// Parses a role from its canonical string form.
    pub fn parse(raw: &str) -> IamResult<Self> {
        match raw.trim() {
            "STUDENT" => Ok(Self::Student),
            "TEACHER" => Ok(Self::Teacher),
            "SECRETARY" => Ok(Self::Secretary),
            "ADMIN" => Ok(Self::Admin),
            other => Err(IamError::InvalidRole(other.to_string())),
        }
    }
}

impl ValueObject for UserRole {}

impl FromStr for UserRole {
    type Err = IamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_roles() {
        assert_eq!(UserRole::parse("STUDENT").unwrap(), UserRole::Student);
        assert_eq!(UserRole::parse(" ADMIN ").unwrap(), UserRole::Admin);
    }

    #[test]
    fn test_parse_rejects_unknown_role() {
        let err = UserRole::parse("SUPERUSER").unwrap_err();
        assert_eq!(err, IamError::InvalidRole("SUPERUSER".to_string()));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(UserRole::parse("student").is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&UserRole::Secretary).unwrap();
        assert_eq!(json, "\"SECRETARY\"");
        let back: UserRole = serde_json::from_str(&json).unwrap();
        assert_eq!(back, UserRole::Secretary);
    }
}
