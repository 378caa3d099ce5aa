//! User controller.

use crate::{
    extractors::AuthenticatedUser,
    responses::{ok, ApiError, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use tracing::debug;
use unsacad_kernel::{AppError, EntityId};
use unsacad_service::UserResponse;

/// Creates the user router. Every route requires authentication.
pub fn router() -> Router<AppState> {
    Router::new().route("/:id", get(get_user))
}

/// Get a user by id.
async fn get_user(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<UserResponse> {
    debug!("Get user {} requested by {}", id, user.username);

    let id = EntityId::parse(&id)
        .map_err(|_| ApiError(AppError::validation(format!("Invalid user id '{id}'"))))?;

    let response = state.user_service.get_user(id).await?;
    ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::AuthMiddlewareState;
    use crate::router::create_router;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use chrono::Utc;
    use std::sync::Arc;
    use tower::ServiceExt;
    use unsacad_config::{SecurityConfig, ServerConfig};
    use unsacad_domain::UserRole;
    use unsacad_kernel::AppResult;
    use unsacad_security::TokenProvider;
    use unsacad_service::{
        AuthService, CreateUserRequest, LoginRequest, RefreshTokenRequest, TokenResponse,
        UserService,
    };

    struct StubUserService;

    #[async_trait]
    impl UserService for StubUserService {
        async fn create_user(&self, _request: CreateUserRequest) -> AppResult<UserResponse> {
            Err(AppError::internal("not wired in this test"))
        }

        async fn get_user(&self, id: EntityId) -> AppResult<UserResponse> {
            Ok(UserResponse {
                id: id.to_string(),
                username: "jdoe".to_string(),
                email: "jdoe@example.com".to_string(),
                first_name: "ANA".to_string(),
                last_name: "LOPEZ".to_string(),
                role: UserRole::Student,
                active: true,
                created_at: Utc::now(),
            })
        }
    }

    struct StubAuthService;

    #[async_trait]
    impl AuthService for StubAuthService {
        async fn login(&self, _request: LoginRequest) -> AppResult<TokenResponse> {
            Err(AppError::InvalidCredentials)
        }

        async fn refresh(&self, _request: RefreshTokenRequest) -> AppResult<TokenResponse> {
            Err(AppError::InvalidCredentials)
        }

        async fn current_user(&self, _user_id: EntityId) -> AppResult<UserResponse> {
            Err(AppError::not_found("User", "unknown"))
        }
    }

    fn test_router() -> (axum::Router, Arc<TokenProvider>) {
        let tokens = Arc::new(TokenProvider::new(Arc::new(SecurityConfig {
            jwt_secret: "test-secret-key-for-testing-only".to_string(),
            jwt_access_expiration_secs: 3600,
            jwt_refresh_expiration_secs: 86400,
            jwt_issuer: "test-issuer".to_string(),
            jwt_audience: "test-audience".to_string(),
        })));

        let state = AppState::new(Arc::new(StubUserService), Arc::new(StubAuthService));
        let auth_state = AuthMiddlewareState::new(Arc::clone(&tokens));
        let router = create_router(state, auth_state, &ServerConfig::default());
        (router, tokens)
    }

    #[tokio::test]
    async fn test_get_user_without_token_is_unauthorized() {
        let (router, _) = test_router();

        let request = Request::builder()
            .uri(format!("/api/v1/users/{}", EntityId::new()))
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_get_user_with_garbage_token_is_unauthorized() {
        let (router, _) = test_router();

        let request = Request::builder()
            .uri(format!("/api/v1/users/{}", EntityId::new()))
            .header(header::AUTHORIZATION, "Bearer not-a-token")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_get_user_with_valid_token() {
        let (router, tokens) = test_router();
        let id = EntityId::new();
        let token = tokens
            .generate_access_token(id, "jdoe", "jdoe@example.com", UserRole::Student)
            .unwrap();

        let request = Request::builder()
            .uri(format!("/api/v1/users/{id}"))
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
