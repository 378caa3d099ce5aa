//! # Unsacad Domain
//!
//! IAM domain model for the university-administration backend: the
//! `UserAccount` aggregate, its value objects, domain events, errors,
//! and the persistence port. Everything here is pure domain logic built
//! on the `unsacad-kernel` base abstractions; no I/O.

pub mod errors;
pub mod events;
pub mod repository;
pub mod user_account;
pub mod value_objects;

pub use errors::{ConflictingIdentifier, IamError, IamResult};
pub use events::{UserCreated, UserCreatedPayload};
pub use repository::UserRepository;
pub use user_account::{CreateUser, RehydrateUser, UserAccount, UserSnapshot};
pub use value_objects::{
    ActiveFlag, EmailAddress, HashedPassword, PersonName, UserRole, Username,
};
