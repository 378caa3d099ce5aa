//! # Unsacad Security
//!
//! Password hashing (Argon2id) and JWT issuance/validation for the
//! Unsacad backend.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, TokenPair, TokenProvider, TokenType};
pub use password::{PasswordHasher, PasswordHashing};
