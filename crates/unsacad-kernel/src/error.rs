//! Unified error types for all layers of the application.
//!
//! Two channels are kept deliberately distinct:
//!
//! - **Expected business failures** implement [`DomainError`] and travel
//!   inside `Err(..)` through ordinary `Result` composition.
//! - **Invariant violations** at trusted boundaries surface as
//!   [`KernelError`] (or a panic, when code explicitly asserts with
//!   `unwrap`), and are converted to a generic failure at the edge.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt::Debug;
use thiserror::Error;

/// Expected business-rule failure, designed to be returned through `Err`.
///
/// Implementors are plain `thiserror` enums owned by their business module;
/// the trait supplies the stable code, HTTP mapping, and the JSON-safe shape
/// used for logging and API translation.
pub trait DomainError: std::error::Error + Send + Sync {
    /// Stable, machine-readable error code (e.g. `USER.ALREADY_EXISTS`).
    fn code(&self) -> &'static str;

    /// HTTP status this failure maps to at the transport boundary.
    fn status_code(&self) -> u16 {
        400
    }

    /// Structured metadata for debugging or API payloads.
    fn metadata(&self) -> Option<Value> {
        None
    }

    /// JSON-safe representation for logging or API responses.
    fn to_json(&self) -> Value {
        json!({
            "code": self.code(),
            "message": self.to_string(),
            "metadata": self.metadata(),
        })
    }
}

/// Kernel-level invariant failures.
///
/// These are programmer errors: malformed arguments reaching code that
/// assumes pre-validated input. They are not part of ordinary business
/// control flow and map to a generic failure response at the edge.
#[derive(Error, Debug)]
pub enum KernelError {
    /// An argument did not meet the required format or constraints.
    #[error("Invalid argument: {0}")]
    ArgumentInvalid(String),

    /// A required argument was missing or blank.
    #[error("Argument not provided: {0}")]
    ArgumentNotProvided(String),

    /// A required entity could not be found where its absence is a bug.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization of a kernel value failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl KernelError {
    /// Returns a machine-readable code discriminating the failure kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ArgumentInvalid(_) => "ARGUMENT_INVALID",
            Self::ArgumentNotProvided(_) => "ARGUMENT_NOT_PROVIDED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// JSON-safe representation (`{message, code, cause, metadata}`).
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "message": self.to_string(),
            "code": self.code(),
            "cause": Value::Null,
            "metadata": Value::Null,
        })
    }
}

/// A specialized `Result` for kernel operations.
pub type KernelResult<T> = Result<T, KernelError>;

/// Unified application-layer error for Unsacad.
///
/// Business failures enter through [`AppError::from_domain`] keeping their
/// code and status; everything else covers the infrastructure and
/// authentication edges the application services touch.
#[derive(Error, Debug)]
pub enum AppError {
    // ============ Domain Errors ============
    /// Expected business-rule failure, flattened from a [`DomainError`].
    #[error("{message}")]
    Domain {
        code: &'static str,
        message: String,
        status: u16,
        metadata: Option<Value>,
    },

    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict error (e.g., duplicate entry)
    #[error("Conflict: {0}")]
    Conflict(String),

    // ============ Authentication Errors ============
    /// Unauthorized access
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Invalid token
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token expired
    #[error("Token expired")]
    TokenExpired,

    /// Invalid credentials
    #[error("Invalid credentials")]
    InvalidCredentials,

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Flattens a [`DomainError`] into the unified error, keeping its code,
    /// status, and metadata.
    #[must_use]
    pub fn from_domain(error: &dyn DomainError) -> Self {
        Self::Domain {
            code: error.code(),
            message: error.to_string(),
            status: error.status_code(),
            metadata: error.metadata(),
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Domain { status, .. } => *status,
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Conflict(_) => 409,
            Self::Unauthorized(_) | Self::InvalidToken(_) | Self::TokenExpired | Self::InvalidCredentials => 401,
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Domain { code, .. } => code,
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::InvalidToken(_) => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an unauthorized error.
    #[must_use]
    pub fn unauthorized<T: Into<String>>(message: T) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

impl From<KernelError> for AppError {
    fn from(err: KernelError) -> Self {
        match err {
            KernelError::NotFound(msg) => Self::NotFound {
                resource_type: "entity",
                id: msg,
            },
            other => Self::Internal(other.to_string()),
        }
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) => {
                // PostgreSQL unique constraint violation
                if let Some(code) = db_err.code() {
                    if code == "23505" {
                        return Self::Conflict(db_err.message().to_string());
                    }
                }
                Self::Database(err.to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured details (e.g. domain metadata)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// Request trace ID for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response from an `AppError`.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        let details = match error {
            AppError::Domain { metadata, .. } => metadata.clone(),
            _ => None,
        };
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details,
            trace_id: None,
        }
    }

    /// Sets the trace ID.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self::from_error(error)
    }
}
