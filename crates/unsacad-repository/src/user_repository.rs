//! SQLx-backed user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;
use unsacad_domain::{
    ActiveFlag, ConflictingIdentifier, EmailAddress, HashedPassword, PersonName, RehydrateUser,
    UserAccount, UserRepository, UserRole, Username,
};
use unsacad_kernel::{AppError, AppResult, Entity, EntityId, Repository};
use uuid::Uuid;

/// Row shape of the `iam_users` table.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    password_hash: String,
    role: String,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    /// Maps the row back into an aggregate through the trusted
    /// rehydration path; only the role string can fail, and a bad role
    /// in storage is corruption, not a business error.
    fn into_aggregate(self) -> AppResult<UserAccount> {
        let role = UserRole::parse(&self.role).map_err(|_| {
            AppError::Internal(format!(
                "corrupt role '{}' stored for user {}",
                self.role, self.id
            ))
        })?;

        Ok(UserAccount::rehydrate(RehydrateUser {
            id: EntityId::from_uuid(self.id),
            username: Username::new_unchecked(self.username),
            email: EmailAddress::new_unchecked(self.email),
            first_name: PersonName::new_unchecked(self.first_name),
            last_name: PersonName::new_unchecked(self.last_name),
            password_hash: HashedPassword::new_unchecked(self.password_hash),
            role,
            active: ActiveFlag::from_bool(self.active),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }))
    }
}

/// Postgres implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Creates the repository over a connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(&self, column: &str, value: &str) -> AppResult<Option<UserAccount>> {
        let query = format!(
            "SELECT id, username, email, first_name, last_name, password_hash, role, active, \
             created_at, updated_at FROM iam_users WHERE {column} = $1"
        );
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        row.map(UserRow::into_aggregate).transpose()
    }
}

#[async_trait]
impl Repository<UserAccount, EntityId> for PgUserRepository {
    async fn save(&self, user: &UserAccount) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO iam_users \
             (id, username, email, first_name, last_name, password_hash, role, active, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             ON CONFLICT (id) DO UPDATE SET \
             username = EXCLUDED.username, \
             email = EXCLUDED.email, \
             first_name = EXCLUDED.first_name, \
             last_name = EXCLUDED.last_name, \
             password_hash = EXCLUDED.password_hash, \
             role = EXCLUDED.role, \
             active = EXCLUDED.active, \
             updated_at = EXCLUDED.updated_at",
        )
        .bind(user.id().into_inner())
        .bind(user.username().as_str())
        .bind(user.email().as_str())
        .bind(user.first_name().as_str())
        .bind(user.last_name().as_str())
        .bind(user.password_hash().as_str())
        .bind(user.role().as_str())
        .bind(user.is_active())
        .bind(user.created_at())
        .bind(user.updated_at())
        .execute(&self.pool)
        .await?;

        debug!(user_id = %user.id(), "user saved");
        Ok(())
    }

    async fn find_by_id(&self, id: &EntityId) -> AppResult<Option<UserAccount>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email, first_name, last_name, password_hash, role, active, \
             created_at, updated_at FROM iam_users WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_aggregate).transpose()
    }

    async fn delete(&self, id: &EntityId) -> AppResult<()> {
        sqlx::query("DELETE FROM iam_users WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await?;

        debug!(user_id = %id, "user deleted");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_username(&self, username: &Username) -> AppResult<Option<UserAccount>> {
        self.find_one("username", username.as_str()).await
    }

    async fn find_by_email(&self, email: &EmailAddress) -> AppResult<Option<UserAccount>> {
        self.find_one("email", email.as_str()).await
    }

    async fn find_conflicting_identifier(
        &self,
        email: &EmailAddress,
        username: &Username,
    ) -> AppResult<Option<ConflictingIdentifier>> {
        // One round trip for both identifiers; an email collision wins
        // when both are taken.
        let row: Option<(String,)> = sqlx::query_as(
            "SELECT email FROM iam_users WHERE email = $1 OR username = $2 \
             ORDER BY (email = $1)::int DESC LIMIT 1",
        )
        .bind(email.as_str())
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(stored_email,)| {
            if stored_email == email.as_str() {
                ConflictingIdentifier::Email
            } else {
                ConflictingIdentifier::Username
            }
        }))
    }

    async fn exists_by_username(&self, username: &Username) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM iam_users WHERE username = $1)")
                .bind(username.as_str())
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn exists_by_email(&self, email: &EmailAddress) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM iam_users WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> UserRow {
        let now = Utc::now();
        UserRow {
            id: Uuid::new_v4(),
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            first_name: "ANA".to_string(),
            last_name: "LOPEZ".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaGhhc2g".to_string(),
            role: "TEACHER".to_string(),
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_row_rehydrates_without_events() {
        use unsacad_kernel::AggregateRoot;

        let row = sample_row();
        let id = row.id;
        let user = row.into_aggregate().unwrap();

        assert_eq!(user.id().into_inner(), id);
        assert_eq!(user.role(), UserRole::Teacher);
        assert!(user.is_active());
        assert!(user.domain_events().is_empty());
    }

    #[test]
    fn test_corrupt_role_is_an_internal_error() {
        let mut row = sample_row();
        row.role = "WIZARD".to_string();

        let err = row.into_aggregate().unwrap_err();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }
}
