//! In-memory fakes shared by the service tests.

use crate::dto::CreateUserRequest;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use unsacad_domain::{
    ActiveFlag, ConflictingIdentifier, EmailAddress, HashedPassword, PersonName, RehydrateUser,
    UserAccount, UserRepository, Username,
};
use unsacad_kernel::{AppResult, EntityId, Repository};
use unsacad_security::{PasswordHasher, PasswordHashing};

/// A stored row, mirroring what a database table would hold.
#[derive(Debug, Clone)]
struct StoredUser {
    id: EntityId,
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    password_hash: String,
    role: unsacad_domain::UserRole,
    active: bool,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl StoredUser {
    fn from_aggregate(user: &UserAccount) -> Self {
        Self {
            id: *unsacad_kernel::Entity::id(user),
            username: user.username().as_str().to_string(),
            email: user.email().as_str().to_string(),
            first_name: user.first_name().as_str().to_string(),
            last_name: user.last_name().as_str().to_string(),
            password_hash: user.password_hash().as_str().to_string(),
            role: user.role(),
            active: user.is_active(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }

    fn rehydrate(&self) -> UserAccount {
        UserAccount::rehydrate(RehydrateUser {
            id: self.id,
            username: Username::new_unchecked(self.username.clone()),
            email: EmailAddress::new_unchecked(self.email.clone()),
            first_name: PersonName::new_unchecked(self.first_name.clone()),
            last_name: PersonName::new_unchecked(self.last_name.clone()),
            password_hash: HashedPassword::new_unchecked(self.password_hash.clone()),
            role: self.role,
            active: ActiveFlag::from_bool(self.active),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// In-memory [`UserRepository`] fake.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<EntityId, StoredUser>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl Repository<UserAccount, EntityId> for InMemoryUserRepository {
    async fn save(&self, user: &UserAccount) -> AppResult<()> {
        let row = StoredUser::from_aggregate(user);
        self.users.lock().unwrap().insert(row.id, row);
        Ok(())
    }

    async fn find_by_id(&self, id: &EntityId) -> AppResult<Option<UserAccount>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .get(id)
            .map(StoredUser::rehydrate))
    }

    async fn delete(&self, id: &EntityId) -> AppResult<()> {
        self.users.lock().unwrap().remove(id);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &Username) -> AppResult<Option<UserAccount>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username == username.as_str())
            .map(StoredUser::rehydrate))
    }

    async fn find_by_email(&self, email: &EmailAddress) -> AppResult<Option<UserAccount>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email.as_str())
            .map(StoredUser::rehydrate))
    }

    async fn find_conflicting_identifier(
        &self,
        email: &EmailAddress,
        username: &Username,
    ) -> AppResult<Option<ConflictingIdentifier>> {
        let users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == email.as_str()) {
            return Ok(Some(ConflictingIdentifier::Email));
        }
        if users.values().any(|u| u.username == username.as_str()) {
            return Ok(Some(ConflictingIdentifier::Username));
        }
        Ok(None)
    }

    async fn exists_by_username(&self, username: &Username) -> AppResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .any(|u| u.username == username.as_str()))
    }

    async fn exists_by_email(&self, email: &EmailAddress) -> AppResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .any(|u| u.email == email.as_str()))
    }
}

/// Fast Argon2 hasher for tests.
pub fn hasher() -> Arc<dyn PasswordHashing> {
    Arc::new(PasswordHasher::with_cost(1))
}

/// A registration request that passes every check.
pub fn valid_request() -> CreateUserRequest {
    CreateUserRequest {
        username: "jdoe".to_string(),
        email: "jdoe@example.com".to_string(),
        first_name: "Ana".to_string(),
        last_name: "Lopez".to_string(),
        password: "Sup3r$ecretPass".to_string(),
        role: "STUDENT".to_string(),
    }
}

mod tests {
    use super::*;
    use unsacad_domain::CreateUser;

    // The fake must be usable through the generic kernel port alone,
    // like any other Repository implementation.
    #[tokio::test]
    async fn test_fake_satisfies_the_kernel_repository_port() {
        let repository = InMemoryUserRepository::new();
        let user = UserAccount::create(CreateUser {
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaGhhc2g".to_string(),
            role: "STUDENT".to_string(),
        })
        .unwrap();
        let id = *unsacad_kernel::Entity::id(&user);

        Repository::save(&repository, &user).await.unwrap();
        assert!(Repository::find_by_id(&repository, &id)
            .await
            .unwrap()
            .is_some());

        Repository::delete(&repository, &id).await.unwrap();
        assert!(Repository::find_by_id(&repository, &id)
            .await
            .unwrap()
            .is_none());
    }
}
