//! Material category repository implementation.
//!
//! Every statement is scoped by tenant, including single-id reads.

use async_trait::async_trait;
use sqlx::PgPool;

use warehouse_core::error::{AppError, ErrorKind};
use warehouse_core::result::AppResult;
use warehouse_core::types::{ListParams, SearchParams};
use warehouse_entity::category::MaterialCategory;

use crate::gateway::CategoryStore;

const COLUMNS: &str =
    "id, name, company_id, description, slug, created_at, updated_at, is_active, img_url";

/// Repository for material category CRUD and search.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for CategoryRepository {
    async fn create(&self, category: &MaterialCategory) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO material_categories (name, company_id, description, slug, is_active, img_url) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
        )
        .bind(&category.name)
        .bind(category.company_id)
        .bind(&category.description)
        .bind(&category.slug)
        .bind(category.is_active)
        .bind(&category.img_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create category", e))
    }

    async fn find_by_id(&self, id: i64, company_id: i64) -> AppResult<Option<MaterialCategory>> {
        sqlx::query_as::<_, MaterialCategory>(&format!(
            "SELECT {COLUMNS} FROM material_categories WHERE id = $1 AND company_id = $2"
        ))
        .bind(id)
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find category", e))
    }

    async fn update(&self, category: &MaterialCategory) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE material_categories SET name = $3, description = $4, slug = $5, \
             is_active = $6, img_url = $7, updated_at = NOW() \
             WHERE id = $1 AND company_id = $2",
        )
        .bind(category.id)
        .bind(category.company_id)
        .bind(&category.name)
        .bind(&category.description)
        .bind(&category.slug)
        .bind(category.is_active)
        .bind(&category.img_url)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update category", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64, company_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM material_categories WHERE id = $1 AND company_id = $2")
            .bind(id)
            .bind(company_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete category", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, params: &ListParams) -> AppResult<Vec<MaterialCategory>> {
        sqlx::query_as::<_, MaterialCategory>(&format!(
            "SELECT {COLUMNS} FROM material_categories WHERE company_id = $1 \
             ORDER BY id ASC LIMIT $2 OFFSET $3"
        ))
        .bind(params.company_id)
        .bind(params.limit)
        .bind(params.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list categories", e))
    }

    async fn search(&self, params: &SearchParams) -> AppResult<Vec<MaterialCategory>> {
        sqlx::query_as::<_, MaterialCategory>(&format!(
            "SELECT {COLUMNS} FROM material_categories WHERE name ILIKE $1 AND company_id = $2 \
             ORDER BY name ASC, id ASC LIMIT $3 OFFSET $4"
        ))
        .bind(params.like_prefix())
        .bind(params.page.company_id)
        .bind(params.page.limit)
        .bind(params.page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search categories", e))
    }
}
