//! IAM value objects.
//!
//! Every value object follows the same discipline: a private field, a
//! validating `new` factory that trims and normalizes its input, a
//! `new_unchecked` trusted path for persistence rehydration, and
//! structural equality. Immutability is a property of the types, not of
//! runtime checks.

mod active_flag;
mod email;
mod hashed_password;
mod person_name;
mod role;
mod username;

pub use active_flag::ActiveFlag;
pub use email::EmailAddress;
pub use hashed_password::HashedPassword;
pub use person_name::PersonName;
pub use role::UserRole;
pub use username::Username;
