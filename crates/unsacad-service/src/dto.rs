//! Request and response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unsacad_domain::{UserRole, UserSnapshot};
use unsacad_security::TokenPair;
use validator::Validate;

/// Registration request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 50, message = "Username must be 1-50 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 2, message = "First name must be at least 2 characters"))]
    pub first_name: String,

    #[validate(length(min = 2, message = "Last name must be at least 2 characters"))]
    pub last_name: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,

    pub role: String,
}

/// Login request: the identifier is a username or an email address.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Identifier is required"))]
    pub identifier: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Public view of a user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<UserSnapshot> for UserResponse {
    fn from(snapshot: UserSnapshot) -> Self {
        Self {
            id: snapshot.id,
            username: snapshot.username,
            email: snapshot.email,
            first_name: snapshot.first_name,
            last_name: snapshot.last_name,
            role: snapshot.role,
            active: snapshot.active,
            created_at: snapshot.created_at,
        }
    }
}

/// Issued token pair.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub access_expires_at: i64,
    pub refresh_expires_at: i64,
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: pair.token_type,
            access_expires_at: pair.access_expires_at,
            refresh_expires_at: pair.refresh_expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_request_validation() {
        let request = CreateUserRequest {
            username: "jdoe".to_string(),
            email: "j@example.com".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            password: "Sup3r$ecret".to_string(),
            role: "STUDENT".to_string(),
        };
        assert!(request.validate().is_ok());

        let mut bad = request.clone();
        bad.email = "not-an-email".to_string();
        assert!(bad.validate().is_err());

        let mut bad = request;
        bad.password = "short".to_string();
        assert!(bad.validate().is_err());
    }
}
