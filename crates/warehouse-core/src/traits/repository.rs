//! Generic repository trait for keyed, tenant-owned records.

use async_trait::async_trait;

use crate::result::AppResult;

/// A record addressed by a store-assigned numeric id and owned by a tenant.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Short lowercase name of the entity kind, used in cache keys and messages.
    const KIND: &'static str;

    /// The record's identifier (0 before the store has assigned one).
    fn id(&self) -> i64;

    /// Replace the record's identifier.
    fn set_id(&mut self, id: i64);

    /// The owning tenant.
    fn company_id(&self) -> i64;
}

/// Generic CRUD repository trait.
///
/// Each storage backend implements this per entity; read-through caching
/// wraps any implementation without knowing the backend.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync + std::fmt::Debug + 'static {
    /// Find a record by its primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<E>>;

    /// Insert a record and return the assigned id. The record's own id is ignored.
    async fn create(&self, entity: &E) -> AppResult<i64>;

    /// Overwrite the record with the same id and tenant. Returns `true` if a row changed.
    async fn update(&self, entity: &E) -> AppResult<bool>;

    /// Delete a record by its primary key. Returns `true` if deleted.
    async fn delete(&self, id: i64) -> AppResult<bool>;

    /// List every record owned by a tenant.
    async fn list_by_company(&self, company_id: i64) -> AppResult<Vec<E>>;
}
