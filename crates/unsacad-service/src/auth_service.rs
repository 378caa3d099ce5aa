//! Authentication: login, token refresh, current user.

use crate::dto::{LoginRequest, RefreshTokenRequest, TokenResponse, UserResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use unsacad_domain::{EmailAddress, UserAccount, UserRepository, Username};
use unsacad_kernel::{AppError, AppResult, Entity, EntityId, Repository};
use unsacad_security::{PasswordHashing, TokenProvider};
use validator::Validate;

/// Authentication use cases.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verifies credentials and issues a token pair.
    async fn login(&self, request: LoginRequest) -> AppResult<TokenResponse>;

    /// Issues a fresh token pair from a valid refresh token.
    async fn refresh(&self, request: RefreshTokenRequest) -> AppResult<TokenResponse>;

    /// Returns the account behind an authenticated user id.
    async fn current_user(&self, user_id: EntityId) -> AppResult<UserResponse>;
}

/// Default [`AuthService`] implementation.
pub struct AuthServiceImpl {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHashing>,
    tokens: Arc<TokenProvider>,
}

impl AuthServiceImpl {
    /// Creates the service over its ports.
    pub fn new(
        repository: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHashing>,
        tokens: Arc<TokenProvider>,
    ) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }

    /// Finds an account by username or email.
    ///
    /// Identifier validation failures collapse into `InvalidCredentials`
    /// so login never reveals which part of the input was wrong.
    async fn find_by_identifier(&self, identifier: &str) -> AppResult<Option<UserAccount>> {
        if identifier.contains('@') {
            match EmailAddress::new(identifier) {
                Ok(email) => self.repository.find_by_email(&email).await,
                Err(_) => Ok(None),
            }
        } else {
            match Username::new(identifier) {
                Ok(username) => self.repository.find_by_username(&username).await,
                Err(_) => Ok(None),
            }
        }
    }

    fn issue_tokens(&self, user: &UserAccount) -> AppResult<TokenResponse> {
        let pair = self.tokens.generate_tokens(
            *user.id(),
            user.username().as_str(),
            user.email().as_str(),
            user.role(),
        )?;
        Ok(TokenResponse::from(pair))
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    #[instrument(skip_all)]
    async fn login(&self, request: LoginRequest) -> AppResult<TokenResponse> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let Some(user) = self.find_by_identifier(&request.identifier).await? else {
            warn!("login failed: unknown identifier");
            return Err(AppError::InvalidCredentials);
        };

        if !self
            .hasher
            .verify(&request.password, user.password_hash().as_str())?
        {
            warn!(user_id = %user.id(), "login failed: wrong password");
            return Err(AppError::InvalidCredentials);
        }

        if !user.is_active() {
            return Err(AppError::unauthorized("Account is inactive"));
        }

        info!(user_id = %user.id(), "login succeeded");
        self.issue_tokens(&user)
    }

    async fn refresh(&self, request: RefreshTokenRequest) -> AppResult<TokenResponse> {
        let claims = self.tokens.validate_refresh_token(&request.refresh_token)?;

        let user_id = claims
            .user_id()
            .ok_or_else(|| AppError::InvalidToken("Refresh token missing user ID".to_string()))?;

        // Re-read the account so revoked or deactivated users cannot keep
        // refreshing old sessions.
        let user = self
            .repository
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| AppError::InvalidToken("Unknown account".to_string()))?;

        if !user.is_active() {
            return Err(AppError::unauthorized("Account is inactive"));
        }

        self.issue_tokens(&user)
    }

    async fn current_user(&self, user_id: EntityId) -> AppResult<UserResponse> {
        let user = self
            .repository
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User", user_id))?;

        Ok(UserResponse::from(user.to_object()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{hasher, InMemoryUserRepository};
    use unsacad_config::SecurityConfig;
    use unsacad_domain::CreateUser;

    fn token_provider() -> Arc<TokenProvider> {
        Arc::new(TokenProvider::new(Arc::new(SecurityConfig {
            jwt_secret: "test-secret-key-for-testing-only".to_string(),
            jwt_access_expiration_secs: 3600,
            jwt_refresh_expiration_secs: 86400,
            jwt_issuer: "test-issuer".to_string(),
            jwt_audience: "test-audience".to_string(),
        })))
    }

    async fn seed_user(
        repository: &InMemoryUserRepository,
        hashing: &dyn PasswordHashing,
        password: &str,
        active: bool,
    ) -> EntityId {
        let mut user = UserAccount::create(CreateUser {
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            password_hash: hashing.hash(password).unwrap(),
            role: "STUDENT".to_string(),
        })
        .unwrap();
        if !active {
            user.deactivate().unwrap();
        }
        repository.save(&user).await.unwrap();
        *user.id()
    }

    fn service(repository: Arc<InMemoryUserRepository>) -> AuthServiceImpl {
        AuthServiceImpl::new(repository, hasher(), token_provider())
    }

    #[tokio::test]
    async fn test_login_with_username_and_email() {
        let repository = Arc::new(InMemoryUserRepository::new());
        seed_user(&repository, hasher().as_ref(), "Sup3r$ecret", true).await;
        let service = service(repository);

        for identifier in ["jdoe", "jdoe@example.com", "JDoe@Example.COM"] {
            let tokens = service
                .login(LoginRequest {
                    identifier: identifier.to_string(),
                    password: "Sup3r$ecret".to_string(),
                })
                .await
                .unwrap();
            assert_eq!(tokens.token_type, "Bearer");
        }
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password() {
        let repository = Arc::new(InMemoryUserRepository::new());
        seed_user(&repository, hasher().as_ref(), "Sup3r$ecret", true).await;
        let service = service(repository);

        let err = service
            .login(LoginRequest {
                identifier: "jdoe".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CREDENTIALS");
    }

    #[tokio::test]
    async fn test_login_rejects_unknown_user() {
        let repository = Arc::new(InMemoryUserRepository::new());
        let service = service(repository);

        let err = service
            .login(LoginRequest {
                identifier: "nobody".to_string(),
                password: "whatever".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CREDENTIALS");
    }

    #[tokio::test]
    async fn test_login_rejects_inactive_account() {
        let repository = Arc::new(InMemoryUserRepository::new());
        seed_user(&repository, hasher().as_ref(), "Sup3r$ecret", false).await;
        let service = service(repository);

        let err = service
            .login(LoginRequest {
                identifier: "jdoe".to_string(),
                password: "Sup3r$ecret".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_refresh_issues_new_pair() {
        let repository = Arc::new(InMemoryUserRepository::new());
        seed_user(&repository, hasher().as_ref(), "Sup3r$ecret", true).await;
        let service = service(repository);

        let tokens = service
            .login(LoginRequest {
                identifier: "jdoe".to_string(),
                password: "Sup3r$ecret".to_string(),
            })
            .await
            .unwrap();

        let refreshed = service
            .refresh(RefreshTokenRequest {
                refresh_token: tokens.refresh_token,
            })
            .await
            .unwrap();
        assert!(!refreshed.access_token.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_rejects_access_token() {
        let repository = Arc::new(InMemoryUserRepository::new());
        seed_user(&repository, hasher().as_ref(), "Sup3r$ecret", true).await;
        let service = service(repository);

        let tokens = service
            .login(LoginRequest {
                identifier: "jdoe".to_string(),
                password: "Sup3r$ecret".to_string(),
            })
            .await
            .unwrap();

        let err = service
            .refresh(RefreshTokenRequest {
                refresh_token: tokens.access_token,
            })
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_TOKEN");
    }

    #[tokio::test]
    async fn test_refresh_rejects_deactivated_account() {
        let repository = Arc::new(InMemoryUserRepository::new());
        let user_id = seed_user(&repository, hasher().as_ref(), "Sup3r$ecret", true).await;
        let service = service(repository.clone());

        let tokens = service
            .login(LoginRequest {
                identifier: "jdoe".to_string(),
                password: "Sup3r$ecret".to_string(),
            })
            .await
            .unwrap();

        let mut user = repository.find_by_id(&user_id).await.unwrap().unwrap();
        user.deactivate().unwrap();
        repository.save(&user).await.unwrap();

        let err = service
            .refresh(RefreshTokenRequest {
                refresh_token: tokens.refresh_token,
            })
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_current_user() {
        let repository = Arc::new(InMemoryUserRepository::new());
        let user_id = seed_user(&repository, hasher().as_ref(), "Sup3r$ecret", true).await;
        let service = service(repository);

        let me = service.current_user(user_id).await.unwrap();
        assert_eq!(me.username, "jdoe");

        let err = service.current_user(EntityId::new()).await.unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }
}
