//! Storage capabilities for the partitioned material tables.
//!
//! [`MaterialGateway`] covers single-statement reads and writes against one
//! partition. Moves between partitions run through a
//! [`MaterialTransaction`] obtained from [`MaterialGateway::begin`]; a
//! transaction dropped without [`MaterialTransaction::commit`] is rolled back.
//!
//! [`CategoryStore`] and [`UserDirectory`] front the tenant-scoped category
//! table and the read-only user table.

use async_trait::async_trait;

use warehouse_core::result::AppResult;
use warehouse_core::types::{ListParams, SearchParams};
use warehouse_entity::category::MaterialCategory;
use warehouse_entity::material::{
    Material, MaterialDraft, MaterialIds, MaterialPartition, MaterialSearchHit,
};
use warehouse_entity::user::User;

/// Partition-generic access to material rows.
#[async_trait]
pub trait MaterialGateway: Send + Sync + std::fmt::Debug + 'static {
    /// Start a transaction spanning several partitions.
    async fn begin(&self) -> AppResult<Box<dyn MaterialTransaction>>;

    /// Read one row.
    async fn find_by_id(&self, partition: MaterialPartition, id: i64)
    -> AppResult<Option<Material>>;

    /// Read one page of a tenant's rows, ordered by id.
    async fn list(
        &self,
        partition: MaterialPartition,
        params: &ListParams,
    ) -> AppResult<Vec<Material>>;

    /// Insert a row and return the ids assigned to it.
    async fn create(
        &self,
        partition: MaterialPartition,
        draft: &MaterialDraft<'_>,
    ) -> AppResult<MaterialIds>;

    /// Overwrite the fields of the row matching the material's id and tenant.
    /// `item_id` is left untouched. Returns `true` if a row changed.
    async fn update(
        &self,
        partition: MaterialPartition,
        id: i64,
        draft: &MaterialDraft<'_>,
    ) -> AppResult<bool>;

    /// Delete one row. Returns `true` if it existed.
    async fn delete(&self, partition: MaterialPartition, id: i64) -> AppResult<bool>;

    /// Name-prefix search over Planning and Purchased, ordered by name.
    async fn search(&self, params: &SearchParams) -> AppResult<Vec<MaterialSearchHit>>;
}

/// An open multi-statement transaction over the material partitions.
#[async_trait]
pub trait MaterialTransaction: Send {
    /// Read one row and lock it until the transaction ends.
    async fn find_for_update(
        &mut self,
        partition: MaterialPartition,
        id: i64,
    ) -> AppResult<Option<Material>>;

    /// Delete one row. Returns `true` if it existed.
    async fn delete(&mut self, partition: MaterialPartition, id: i64) -> AppResult<bool>;

    /// Insert a row and return the ids assigned to it.
    async fn insert(
        &mut self,
        partition: MaterialPartition,
        draft: &MaterialDraft<'_>,
    ) -> AppResult<MaterialIds>;

    /// Make every statement of the transaction visible.
    async fn commit(self: Box<Self>) -> AppResult<()>;

    /// Discard every statement of the transaction.
    async fn rollback(self: Box<Self>) -> AppResult<()>;
}

/// Material categories; every single-row call is scoped to a tenant.
#[async_trait]
pub trait CategoryStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a category and return its id.
    async fn create(&self, category: &MaterialCategory) -> AppResult<i64>;

    /// Find a category owned by a tenant.
    async fn find_by_id(&self, id: i64, company_id: i64) -> AppResult<Option<MaterialCategory>>;

    /// Overwrite the category with the same id and tenant. Returns `true` if a row changed.
    async fn update(&self, category: &MaterialCategory) -> AppResult<bool>;

    /// Delete a tenant's category. Returns `true` if it existed.
    async fn delete(&self, id: i64, company_id: i64) -> AppResult<bool>;

    /// One page of a tenant's categories, ordered by id.
    async fn list(&self, params: &ListParams) -> AppResult<Vec<MaterialCategory>>;

    /// Categories whose name starts with the query, ordered by name.
    async fn search(&self, params: &SearchParams) -> AppResult<Vec<MaterialCategory>>;
}

/// Read-only access to a tenant's users.
#[async_trait]
pub trait UserDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// Users of a company holding at least one of the given sections, ordered by id.
    async fn find_by_sections(&self, company_id: i64, sections: &[&str]) -> AppResult<Vec<User>>;
}
