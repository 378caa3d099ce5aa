//! Persistence port for user accounts.

use crate::errors::ConflictingIdentifier;
use crate::user_account::UserAccount;
use crate::value_objects::{EmailAddress, Username};
use async_trait::async_trait;
use unsacad_kernel::{AppResult, EntityId, Repository};

/// Storage port for [`UserAccount`], implemented in the infrastructure
/// layer. The kernel [`Repository`] supertrait carries `save`,
/// `find_by_id`, and `delete`; this trait adds the IAM-specific lookups.
/// Lookups take validated value objects, so implementations never see
/// unnormalized input.
#[async_trait]
pub trait UserRepository: Repository<UserAccount, EntityId> {
    async fn find_by_username(&self, username: &Username) -> AppResult<Option<UserAccount>>;

    async fn find_by_email(&self, email: &EmailAddress) -> AppResult<Option<UserAccount>>;

    /// Checks both unique identifiers in one query and reports which one
    /// (if any) is already taken. Email is checked first, so when both
    /// collide the email conflict is the one reported.
    async fn find_conflicting_identifier(
        &self,
        email: &EmailAddress,
        username: &Username,
    ) -> AppResult<Option<ConflictingIdentifier>>;

    async fn exists_by_username(&self, username: &Username) -> AppResult<bool>;

    async fn exists_by_email(&self, email: &EmailAddress) -> AppResult<bool>;
}
