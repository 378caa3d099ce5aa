//! Entity and value-object base traits.

use std::fmt::Debug;
use std::hash::Hash;

/// An identity-compared domain object.
///
/// Entities are equal by id regardless of property values ("same row,
/// possibly stale copy"). Concrete entities implement `PartialEq` by id
/// to make that the only equality in scope; `same_identity_as` names the
/// comparison explicitly at call sites.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + Hash + Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity-only comparison: true iff both ids are equal.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by structure, never identity.
/// Construction goes through a validating `Result`-returning factory;
/// "mutation" replaces the value wholesale. Immutability is enforced by
/// the type (private fields, no setters), not by runtime freezing.
pub trait ValueObject: Clone + PartialEq + Debug {}
