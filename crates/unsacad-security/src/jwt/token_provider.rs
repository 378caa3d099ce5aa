//! JWT token provider for creating and validating tokens.

use super::Claims;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::sync::Arc;
use tracing::{debug, warn};
use unsacad_config::SecurityConfig;
use unsacad_domain::UserRole;
use unsacad_kernel::{AppError, AppResult, EntityId};

/// Token pair containing access and refresh tokens.
#[derive(Debug, Clone)]
pub struct TokenPair {
    /// Access token (short-lived).
    pub access_token: String,
    /// Refresh token (long-lived).
    pub refresh_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: i64,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: i64,
    /// Token type (always "Bearer").
    pub token_type: String,
}

/// JWT token provider (HS256 with issuer/audience validation).
#[derive(Clone)]
pub struct TokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: Arc<SecurityConfig>,
    validation: Validation,
}

impl TokenProvider {
    /// Creates a new token provider.
    #[must_use]
    pub fn new(config: Arc<SecurityConfig>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.jwt_issuer]);
        validation.set_audience(&[&config.jwt_audience]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            encoding_key,
            decoding_key,
            config,
            validation,
        }
    }

    /// Generates a token pair for a user.
    pub fn generate_tokens(
        &self,
        user_id: EntityId,
        username: &str,
        email: &str,
        role: UserRole,
    ) -> AppResult<TokenPair> {
        let session_id = uuid::Uuid::new_v4().to_string();

        let access_token = self.generate_access_token(user_id, username, email, role)?;
        let refresh_token =
            self.generate_refresh_token(user_id, username, email, role, &session_id)?;

        let access_expires_at = (Utc::now()
            + Duration::seconds(self.config.jwt_access_expiration_secs as i64))
        .timestamp();
        let refresh_expires_at = (Utc::now()
            + Duration::seconds(self.config.jwt_refresh_expiration_secs as i64))
        .timestamp();

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at,
            refresh_expires_at,
            token_type: "Bearer".to_string(),
        })
    }

    /// Generates an access token.
    pub fn generate_access_token(
        &self,
        user_id: EntityId,
        username: &str,
        email: &str,
        role: UserRole,
    ) -> AppResult<String> {
        let expires_at =
            Utc::now() + Duration::seconds(self.config.jwt_access_expiration_secs as i64);

        let claims = Claims::new_access(
            user_id,
            username.to_string(),
            email.to_string(),
            role,
            self.config.jwt_issuer.clone(),
            self.config.jwt_audience.clone(),
            expires_at,
        );

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to generate access token: {}", e)))?;

        debug!("Generated access token for user {}", user_id);
        Ok(token)
    }

    /// Generates a refresh token.
    pub fn generate_refresh_token(
        &self,
        user_id: EntityId,
        username: &str,
        email: &str,
        role: UserRole,
        session_id: &str,
    ) -> AppResult<String> {
        let expires_at =
            Utc::now() + Duration::seconds(self.config.jwt_refresh_expiration_secs as i64);

        let claims = Claims::new_refresh(
            user_id,
            username.to_string(),
            email.to_string(),
            role,
            self.config.jwt_issuer.clone(),
            self.config.jwt_audience.clone(),
            expires_at,
            session_id.to_string(),
        );

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to generate refresh token: {}", e)))?;

        debug!("Generated refresh token for user {}", user_id);
        Ok(token)
    }

    /// Validates a token and returns the claims.
    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                warn!("Token validation failed: {}", e);
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidToken
                    | jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::InvalidToken("Invalid token signature".to_string())
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidIssuer => {
                        AppError::InvalidToken("Invalid token issuer".to_string())
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidAudience => {
                        AppError::InvalidToken("Invalid token audience".to_string())
                    }
                    _ => AppError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Validates an access token specifically.
    pub fn validate_access_token(&self, token: &str) -> AppResult<Claims> {
        let claims = self.validate_token(token)?;

        if !claims.is_access_token() {
            return Err(AppError::InvalidToken("Expected access token".to_string()));
        }

        Ok(claims)
    }

    /// Validates a refresh token specifically.
    pub fn validate_refresh_token(&self, token: &str) -> AppResult<Claims> {
        let claims = self.validate_token(token)?;

        if !claims.is_refresh_token() {
            return Err(AppError::InvalidToken("Expected refresh token".to_string()));
        }

        Ok(claims)
    }

    /// Refreshes a token pair using a refresh token.
    pub fn refresh_tokens(&self, refresh_token: &str) -> AppResult<TokenPair> {
        let claims = self.validate_refresh_token(refresh_token)?;

        let user_id = claims
            .user_id()
            .ok_or_else(|| AppError::InvalidToken("Refresh token missing user ID".to_string()))?;

        self.generate_tokens(user_id, &claims.username, &claims.email, claims.role)
    }
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider")
            .field("issuer", &self.config.jwt_issuer)
            .field("audience", &self.config.jwt_audience)
            .finish_non_exhaustive()
    }
}
