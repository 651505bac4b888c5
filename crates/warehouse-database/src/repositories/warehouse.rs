//! Warehouse repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use warehouse_core::error::{AppError, ErrorKind};
use warehouse_core::result::AppResult;
use warehouse_core::traits::Repository;
use warehouse_entity::warehouse::Warehouse;

const COLUMNS: &str = "id, name, address, responsible_person, phone, email, max_capacity, \
     current_occupancy, other_fields, country, company_id";

/// Repository for warehouse CRUD operations.
#[derive(Debug, Clone)]
pub struct WarehouseRepository {
    pool: PgPool,
}

impl WarehouseRepository {
    /// Create a new warehouse repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Warehouse> for WarehouseRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Warehouse>> {
        sqlx::query_as::<_, Warehouse>(&format!("SELECT {COLUMNS} FROM warehouses WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find warehouse", e))
    }

    async fn create(&self, warehouse: &Warehouse) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO warehouses (name, address, responsible_person, phone, email, \
             max_capacity, current_occupancy, other_fields, country, company_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING id",
        )
        .bind(&warehouse.name)
        .bind(&warehouse.address)
        .bind(&warehouse.responsible_person)
        .bind(&warehouse.phone)
        .bind(&warehouse.email)
        .bind(warehouse.max_capacity)
        .bind(warehouse.current_occupancy)
        .bind(sqlx::types::Json(&warehouse.other_fields))
        .bind(&warehouse.country)
        .bind(warehouse.company_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create warehouse", e))
    }

    async fn update(&self, warehouse: &Warehouse) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE warehouses SET name = $2, address = $3, responsible_person = $4, phone = $5, \
             email = $6, max_capacity = $7, current_occupancy = $8, other_fields = $9, country = $10 \
             WHERE id = $1 AND company_id = $11",
        )
        .bind(warehouse.id)
        .bind(&warehouse.name)
        .bind(&warehouse.address)
        .bind(&warehouse.responsible_person)
        .bind(&warehouse.phone)
        .bind(&warehouse.email)
        .bind(warehouse.max_capacity)
        .bind(warehouse.current_occupancy)
        .bind(sqlx::types::Json(&warehouse.other_fields))
        .bind(&warehouse.country)
        .bind(warehouse.company_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update warehouse", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM warehouses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete warehouse", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_by_company(&self, company_id: i64) -> AppResult<Vec<Warehouse>> {
        sqlx::query_as::<_, Warehouse>(&format!(
            "SELECT {COLUMNS} FROM warehouses WHERE company_id = $1 ORDER BY id ASC"
        ))
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list warehouses", e))
    }
}
