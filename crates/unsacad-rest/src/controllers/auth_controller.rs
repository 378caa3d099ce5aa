//! Authentication controller.

use crate::{
    extractors::AuthenticatedUser,
    responses::{created, ok, ApiError, ApiResponse, ApiResult},
    state::AppState,
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::debug;
use unsacad_kernel::AppError;
use unsacad_service::{
    CreateUserRequest, LoginRequest, RefreshTokenRequest, TokenResponse, UserResponse,
};

/// Creates the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/refresh", post(refresh_token))
        .route("/me", get(get_current_user))
}

/// Register a new user account.
async fn register(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    debug!("Registration request for: {}", request.username);

    let response = state.user_service.create_user(request).await?;
    Ok(created(response))
}

/// Login with username/email and password.
async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<TokenResponse> {
    debug!("Login request for: {}", request.identifier);

    let response = state.auth_service.login(request).await?;
    ok(response)
}

/// Refresh the token pair using a refresh token.
async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> ApiResult<TokenResponse> {
    debug!("Token refresh request");

    let response = state.auth_service.refresh(request).await?;
    ok(response)
}

/// Get the current authenticated user.
async fn get_current_user(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<UserResponse> {
    debug!("Get current user: {}", user.username);

    let user_id = user
        .user_id()
        .ok_or_else(|| ApiError(AppError::InvalidToken("Missing user ID".to_string())))?;

    let response = state.auth_service.current_user(user_id).await?;
    ok(response)
}
