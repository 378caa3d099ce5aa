//! The user account aggregate.

use crate::errors::IamResult;
use crate::events::UserCreated;
use crate::value_objects::{
    ActiveFlag, EmailAddress, HashedPassword, PersonName, UserRole, Username,
};
use crate::IamError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use unsacad_kernel::{all, AggregateRoot, DomainEvents, Entity, EntityId};

/// Raw inputs for creating a new user account.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub role: String,
}

/// Already-validated state for reconstructing an account from storage.
#[derive(Debug)]
pub struct RehydrateUser {
    pub id: EntityId,
    pub username: Username,
    pub email: EmailAddress,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub password_hash: HashedPassword,
    pub role: UserRole,
    pub active: ActiveFlag,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// JSON-serializable snapshot of an account, for DTO and logging
/// boundaries. Never used for persistence mapping.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSnapshot {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A university user account.
///
/// The aggregate root of the IAM module. All state is private and only
/// changes through domain methods; pending events accumulate between
/// creation and the post-persistence pull.
#[derive(Debug)]
pub struct UserAccount {
    id: EntityId,
    username: Username,
    email: EmailAddress,
    first_name: PersonName,
    last_name: PersonName,
    password_hash: HashedPassword,
    role: UserRole,
    active: ActiveFlag,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    events: DomainEvents,
}

impl UserAccount {
    /// Creates a new active account from raw inputs.
    ///
    /// Every value object validates independently; the first failure (in
    /// declaration order) is returned and no partial aggregate exists.
    /// On success exactly one [`UserCreated`] event is recorded.
    pub fn create(props: CreateUser) -> IamResult<Self> {
        let (username, email, first_name, last_name, password_hash, role) = all((
            Username::new(&props.username),
            EmailAddress::new(&props.email),
            PersonName::new(&props.first_name),
            PersonName::new(&props.last_name),
            HashedPassword::new(&props.password_hash),
            UserRole::parse(&props.role),
        ))?;

        let id = EntityId::new();
        let now = Utc::now();
        let mut events = DomainEvents::new();
        events.record(Box::new(UserCreated::new(id, &email, &username, role)));

        Ok(Self {
            id,
            username,
            email,
            first_name,
            last_name,
            password_hash,
            role,
            active: ActiveFlag::active(),
            created_at: now,
            updated_at: now,
            events,
        })
    }

    /// Reconstructs an account from already-validated storage state.
    ///
    /// Trusted path for persistence mappers: skips validation and
    /// records no event.
    #[must_use]
    pub fn rehydrate(props: RehydrateUser) -> Self {
        Self {
            id: props.id,
            username: props.username,
            email: props.email,
            first_name: props.first_name,
            last_name: props.last_name,
            password_hash: props.password_hash,
            role: props.role,
            active: props.active,
            created_at: props.created_at,
            updated_at: props.updated_at,
            events: DomainEvents::new(),
        }
    }

    /// Replaces the password hash with a freshly validated one.
    pub fn change_password(&mut self, new_hash: &str) -> IamResult<()> {
        self.password_hash = HashedPassword::new(new_hash)?;
        self.touch();
        Ok(())
    }

    /// Marks the account active; errors if it already is.
    pub fn activate(&mut self) -> IamResult<()> {
        if self.active.is_active() {
            return Err(IamError::UserAlreadyActive);
        }
        self.active = ActiveFlag::active();
        self.touch();
        Ok(())
    }

    /// Marks the account inactive; errors if it already is.
    pub fn deactivate(&mut self) -> IamResult<()> {
        if !self.active.is_active() {
            return Err(IamError::UserAlreadyInactive);
        }
        self.active = ActiveFlag::inactive();
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Plain snapshot for DTO and logging boundaries.
    #[must_use]
    pub fn to_object(&self) -> UserSnapshot {
        UserSnapshot {
            id: self.id.to_string(),
            username: self.username.as_str().to_string(),
            email: self.email.as_str().to_string(),
            first_name: self.first_name.as_str().to_string(),
            last_name: self.last_name.as_str().to_string(),
            role: self.role,
            active: self.active.is_active(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    #[must_use]
    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    #[must_use]
    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }

    #[must_use]
    pub const fn role(&self) -> UserRole {
        self.role
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active.is_active()
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Entity for UserAccount {
    type Id = EntityId;

    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl AggregateRoot for UserAccount {
    fn events(&self) -> &DomainEvents {
        &self.events
    }

    fn events_mut(&mut self) -> &mut DomainEvents {
        &mut self.events
    }
}

// Identity equality: same id means same account, even with stale props.
impl PartialEq for UserAccount {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for UserAccount {}
