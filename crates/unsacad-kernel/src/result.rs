//! Result type aliases for Unsacad.

use crate::AppError;

/// A specialized `Result` type for application-layer operations.
pub type AppResult<T> = Result<T, AppError>;
