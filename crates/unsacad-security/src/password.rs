//! Password hashing using Argon2.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Argon2, Params,
};
use std::sync::Arc;
use tracing::debug;
use unsacad_kernel::{AppError, AppResult};

/// Port for password hashing operations, faked in service tests.
pub trait PasswordHashing: Send + Sync {
    /// Hashes a plaintext password.
    fn hash(&self, password: &str) -> AppResult<String>;

    /// Verifies a plaintext password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> AppResult<bool>;

    /// Checks if a hash needs to be rehashed.
    fn needs_rehash(&self, hash: &str) -> bool;
}

/// Password hasher using Argon2id.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Arc<Argon2<'static>>,
}

impl PasswordHasher {
    /// Creates a new password hasher with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::with_params(Params::DEFAULT)
    }

    /// Creates a new password hasher with custom parameters.
    #[must_use]
    pub fn with_params(params: Params) -> Self {
        let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);
        Self {
            argon2: Arc::new(argon2),
        }
    }

    /// Creates a password hasher from a memory cost in megabytes.
    #[must_use]
    pub fn with_cost(cost_mb: u32) -> Self {
        let params = Params::new(
            cost_mb * 1024, // memory cost in KiB
            3,              // iterations
            1,              // parallelism
            None,
        )
        .unwrap_or(Params::DEFAULT);

        Self::with_params(params)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHashing for PasswordHasher {
    fn hash(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;

        debug!("Password hashed successfully");
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(format!("Invalid password hash format: {}", e)))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => {
                debug!("Password verification failed: incorrect password");
                Ok(false)
            }
            Err(e) => Err(AppError::Internal(format!(
                "Password verification error: {}",
                e
            ))),
        }
    }

    fn needs_rehash(&self, hash: &str) -> bool {
        // Anything that is not a parseable Argon2id hash gets rehashed on
        // next successful login.
        PasswordHash::new(hash)
            .map(|parsed| parsed.algorithm != argon2::Algorithm::Argon2id.ident())
            .unwrap_or(true)
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher").finish_non_exhaustive()
    }
}
