//! # Unsacad Kernel
//!
//! Shared domain-modeling kernel for the Unsacad university-administration
//! backend. This crate provides the base abstractions reused by every
//! business module: entity identity, value objects, aggregate roots with
//! domain events, guard predicates, fallible-composition helpers, and the
//! error taxonomy shared across layers.

pub mod ddd;
pub mod error;
pub mod functional;
pub mod guard;
pub mod id;
pub mod result;

pub use ddd::*;
pub use error::*;
pub use functional::*;
pub use guard::*;
pub use id::*;
pub use result::*;
