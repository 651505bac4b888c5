//! Generic CRUD service over a [`Repository`].

use std::sync::Arc;

use tracing::info;

use warehouse_core::error::AppError;
use warehouse_core::result::AppResult;
use warehouse_core::traits::{Entity, Repository};
use warehouse_entity::supplier::Supplier;
use warehouse_entity::warehouse::Warehouse;

/// Warehouse CRUD; reads go through the warehouse cache.
pub type WarehouseService = RecordService<Warehouse>;

/// Supplier CRUD; reads go through the supplier cache.
pub type SupplierService = RecordService<Supplier>;

/// CRUD operations for one entity kind.
#[derive(Debug)]
pub struct RecordService<E: Entity> {
    /// Backing repository, usually a read-through cache over storage.
    repo: Arc<dyn Repository<E>>,
}

impl<E: Entity> Clone for RecordService<E> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<E: Entity> RecordService<E> {
    /// Creates a new record service.
    pub fn new(repo: Arc<dyn Repository<E>>) -> Self {
        Self { repo }
    }

    /// Gets a record by ID.
    pub async fn get_by_id(&self, id: i64) -> AppResult<E> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("{} {id} not found", E::KIND)))
    }

    /// Creates a record and returns its ID.
    pub async fn create(&self, record: &E) -> AppResult<i64> {
        let id = self.repo.create(record).await?;
        info!(kind = E::KIND, id, company_id = record.company_id(), "Record created");
        Ok(id)
    }

    /// Overwrites a record. The record's own ID and tenant select the row.
    pub async fn update(&self, record: &E) -> AppResult<()> {
        let id = record.id();
        if id == 0 {
            return Err(AppError::empty_id());
        }
        if !self.repo.update(record).await? {
            return Err(AppError::not_found(format!("{} {id} not found", E::KIND)));
        }
        info!(kind = E::KIND, id, "Record updated");
        Ok(())
    }

    /// Deletes a record by ID.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if id == 0 {
            return Err(AppError::empty_id());
        }
        if !self.repo.delete(id).await? {
            return Err(AppError::not_found(format!("{} {id} not found", E::KIND)));
        }
        info!(kind = E::KIND, id, "Record deleted");
        Ok(())
    }

    /// Lists every record a tenant owns.
    pub async fn list_by_company(&self, company_id: i64) -> AppResult<Vec<E>> {
        self.repo.list_by_company(company_id).await
    }
}
