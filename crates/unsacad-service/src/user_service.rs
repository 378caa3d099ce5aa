//! User registration and lookup.

use crate::dto::{CreateUserRequest, UserResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};
use unsacad_domain::{
    CreateUser, EmailAddress, IamError, UserAccount, UserRepository, Username,
};
use unsacad_kernel::{
    AggregateRoot, AppError, AppResult, DomainEvent, Entity, EntityId, Repository,
};
use unsacad_security::PasswordHashing;
use validator::Validate;

/// User management use cases.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Registers a new user account.
    async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse>;

    /// Looks up a user by id.
    async fn get_user(&self, id: EntityId) -> AppResult<UserResponse>;
}

/// Default [`UserService`] implementation.
pub struct UserServiceImpl {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHashing>,
}

impl UserServiceImpl {
    /// Creates the service over its ports.
    pub fn new(repository: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHashing>) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    #[instrument(skip(self, request), fields(username = %request.username))]
    async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        // Normalize through the value objects before the uniqueness check,
        // so lookups see the same form that will be stored.
        let email = EmailAddress::new(&request.email)?;
        let username = Username::new(&request.username)?;

        if let Some(identifier) = self
            .repository
            .find_conflicting_identifier(&email, &username)
            .await?
        {
            return Err(IamError::UserAlreadyExists { identifier }.into());
        }

        let password_hash = self.hasher.hash(&request.password)?;

        let mut user = UserAccount::create(CreateUser {
            username: request.username,
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            password_hash,
            role: request.role,
        })?;

        self.repository.save(&user).await?;

        for event in user.pull_events() {
            info!(
                event_name = event.event_name(),
                aggregate_id = %event.aggregate_id(),
                "domain event"
            );
        }

        info!(user_id = %user.id(), "user created");
        Ok(UserResponse::from(user.to_object()))
    }

    async fn get_user(&self, id: EntityId) -> AppResult<UserResponse> {
        let user = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::not_found("User", id))?;

        Ok(UserResponse::from(user.to_object()))
    }
}
