//! Expected IAM business failures.

use serde_json::{json, Value};
use thiserror::Error;
use unsacad_kernel::{AppError, DomainError};

/// Which unique identifier collided during a uniqueness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictingIdentifier {
    Username,
    Email,
}

impl ConflictingIdentifier {
    /// Field name for error payloads.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
        }
    }
}

/// Business-rule failures of the IAM module.
///
/// Travel inside `Err` through ordinary `Result` composition; never
/// panicked. Each variant carries a stable code and HTTP mapping through
/// the [`DomainError`] impl.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IamError {
    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Invalid password hash: {0}")]
    InvalidPasswordHash(String),

    #[error("Invalid user role: '{0}'")]
    InvalidRole(String),

    #[error("The user account is already active")]
    UserAlreadyActive,

    #[error("The user account is already inactive")]
    UserAlreadyInactive,

    #[error("A user with this {} already exists", identifier.as_str())]
    UserAlreadyExists { identifier: ConflictingIdentifier },
}

impl DomainError for IamError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidUsername(_) => "USER.INVALID_USERNAME",
            Self::InvalidEmail(_) => "USER.INVALID_EMAIL",
            Self::InvalidName(_) => "USER.INVALID_NAME",
            Self::InvalidPasswordHash(_) => "USER.INVALID_PASSWORD_HASH",
            Self::InvalidRole(_) => "USER.INVALID_ROLE",
            Self::UserAlreadyActive => "USER.ALREADY_ACTIVE",
            Self::UserAlreadyInactive => "USER.ALREADY_INACTIVE",
            Self::UserAlreadyExists { .. } => "USER.ALREADY_EXISTS",
        }
    }

    fn status_code(&self) -> u16 {
        match self {
            Self::UserAlreadyActive | Self::UserAlreadyInactive | Self::UserAlreadyExists { .. } => {
                409
            }
            _ => 400,
        }
    }

    fn metadata(&self) -> Option<Value> {
        match self {
            Self::UserAlreadyExists { identifier } => {
                Some(json!({ "field": identifier.as_str() }))
            }
            Self::InvalidRole(value) => Some(json!({ "value": value })),
            _ => None,
        }
    }
}

impl From<IamError> for AppError {
    fn from(err: IamError) -> Self {
        Self::from_domain(&err)
    }
}

/// A specialized `Result` for IAM domain operations.
pub type IamResult<T> = Result<T, IamError>;
