//! # Unsacad Repository
//!
//! Postgres persistence: connection pool, schema bootstrap, and the
//! SQLx-backed implementation of the domain's `UserRepository` port.

pub mod pool;
pub mod user_repository;

pub use pool::{create_pool, run_migrations};
pub use user_repository::PgUserRepository;
