//! Custom Axum extractors.

use crate::responses::ApiError;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use unsacad_kernel::AppError;
use unsacad_security::Claims;

/// Extractor for authenticated user claims.
///
/// Reads the claims placed in request extensions by the auth middleware
/// and rejects with 401 when they are missing.
pub struct AuthenticatedUser(pub Claims);

impl std::ops::Deref for AuthenticatedUser {
    type Target = Claims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                ApiError(AppError::unauthorized("Missing authorization header"))
            })?;

        if !auth_header.starts_with("Bearer ") {
            return Err(ApiError(AppError::unauthorized(
                "Invalid authorization format",
            )));
        }

        // Claims absent from extensions means the token failed validation.
        let claims = parts
            .extensions
            .get::<Claims>()
            .cloned()
            .ok_or_else(|| ApiError(AppError::unauthorized("Invalid or expired token")))?;

        Ok(Self(claims))
    }
}
