//! JWT claims structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unsacad_domain::UserRole;
use unsacad_kernel::EntityId;
use uuid::Uuid;

/// JWT claims carried by access and refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: String,

    /// Username.
    pub username: String,

    /// User's email.
    pub email: String,

    /// User's role.
    pub role: UserRole,

    /// Token type (access or refresh).
    pub token_type: TokenType,

    /// Issued at timestamp.
    pub iat: i64,

    /// Expiration timestamp.
    pub exp: i64,

    /// Not before timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,

    /// Issuer.
    pub iss: String,

    /// Audience.
    pub aud: String,

    /// JWT ID (unique identifier for this token).
    pub jti: String,

    /// Session ID carried by refresh tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl Claims {
    /// Creates new access token claims.
    #[must_use]
    pub fn new_access(
        user_id: EntityId,
        username: String,
        email: String,
        role: UserRole,
        issuer: String,
        audience: String,
        expires_at: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.to_string(),
            username,
            email,
            role,
            token_type: TokenType::Access,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            nbf: Some(now.timestamp()),
            iss: issuer,
            aud: audience,
            jti: Uuid::new_v4().to_string(),
            session_id: None,
        }
    }

    /// Creates new refresh token claims.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new_refresh(
        user_id: EntityId,
        username: String,
        email: String,
        role: UserRole,
        issuer: String,
        audience: String,
        expires_at: DateTime<Utc>,
        session_id: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.to_string(),
            username,
            email,
            role,
            token_type: TokenType::Refresh,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            nbf: Some(now.timestamp()),
            iss: issuer,
            aud: audience,
            jti: Uuid::new_v4().to_string(),
            session_id: Some(session_id),
        }
    }

    /// Parses the subject back into a user ID.
    #[must_use]
    pub fn user_id(&self) -> Option<EntityId> {
        EntityId::parse(&self.sub).ok()
    }

    /// Checks if the token is expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Returns the expiration time.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks if this is an access token.
    #[must_use]
    pub const fn is_access_token(&self) -> bool {
        matches!(self.token_type, TokenType::Access)
    }

    /// Checks if this is a refresh token.
    #[must_use]
    pub const fn is_refresh_token(&self) -> bool {
        matches!(self.token_type, TokenType::Refresh)
    }
}

/// Token type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Access token (short-lived, used for API requests).
    Access,
    /// Refresh token (long-lived, used to obtain new access tokens).
    Refresh,
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Access => write!(f, "access"),
            Self::Refresh => write!(f, "refresh"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_access_token_claims() {
        let user_id = EntityId::new();
        let expires = Utc::now() + Duration::hours(1);
        let claims = Claims::new_access(
            user_id,
            "jdoe".to_string(),
            "j@example.com".to_string(),
            UserRole::Student,
            "issuer".to_string(),
            "audience".to_string(),
            expires,
        );

        assert!(claims.is_access_token());
        assert!(!claims.is_refresh_token());
        assert!(!claims.is_expired());
        assert_eq!(claims.user_id(), Some(user_id));
    }

    #[test]
    fn test_refresh_token_carries_session() {
        let expires = Utc::now() + Duration::days(7);
        let claims = Claims::new_refresh(
            EntityId::new(),
            "jdoe".to_string(),
            "j@example.com".to_string(),
            UserRole::Admin,
            "issuer".to_string(),
            "audience".to_string(),
            expires,
            "session-1".to_string(),
        );

        assert!(claims.is_refresh_token());
        assert_eq!(claims.session_id.as_deref(), Some("session-1"));
    }
}
