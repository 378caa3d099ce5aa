//! Entity identity.

use crate::KernelError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use uuid::Uuid;

/// Identity value for entities and aggregates.
///
/// Wraps a UUID generated at construction or supplied explicitly when
/// rehydrating from storage. Two ids are equal iff their values are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Creates a new random entity ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an entity ID from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parses an entity ID from a string token.
    ///
    /// Rejects blank input and malformed UUIDs.
    pub fn parse(s: &str) -> Result<Self, KernelError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(KernelError::ArgumentNotProvided("entity id".to_string()));
        }
        let uuid = Uuid::parse_str(s)
            .map_err(|e| KernelError::ArgumentInvalid(format!("entity id '{}': {}", s, e)))?;
        Ok(Self(uuid))
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Returns the inner UUID by reference.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for EntityId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<EntityId> for Uuid {
    fn from(id: EntityId) -> Self {
        id.0
    }
}
