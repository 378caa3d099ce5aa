//! Generic persistence port.

use crate::AppResult;
use async_trait::async_trait;

/// Persistence port for an aggregate type.
///
/// Concrete repositories live in the infrastructure layer and map
/// between aggregates and storage rows; the domain only sees this
/// trait. Domain-specific lookups extend it in their own port traits.
#[async_trait]
pub trait Repository<T, Id>: Send + Sync
where
    T: Send + Sync,
    Id: Send + Sync,
{
    /// Inserts or updates the aggregate.
    async fn save(&self, aggregate: &T) -> AppResult<()>;

    /// Finds an aggregate by id, `None` when absent.
    async fn find_by_id(&self, id: &Id) -> AppResult<Option<T>>;

    /// Deletes the aggregate with the given id, if present.
    async fn delete(&self, id: &Id) -> AppResult<()>;
}
