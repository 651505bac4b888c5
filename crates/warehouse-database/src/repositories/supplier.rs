//! Supplier repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use warehouse_core::error::{AppError, ErrorKind};
use warehouse_core::result::AppResult;
use warehouse_core::traits::Repository;
use warehouse_entity::supplier::Supplier;

const COLUMNS: &str = "id, name, legal_address, actual_address, warehouse_address, contact_person, \
     phone, email, website, contract_number, product_categories, purchase_amount, balance, \
     product_types, comments, files, country, region, tax_id, bank_details, registration_date, \
     payment_terms, is_active, other_fields, company_id";

/// Repository for supplier CRUD operations.
#[derive(Debug, Clone)]
pub struct SupplierRepository {
    pool: PgPool,
}

impl SupplierRepository {
    /// Create a new supplier repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Supplier> for SupplierRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Supplier>> {
        sqlx::query_as::<_, Supplier>(&format!("SELECT {COLUMNS} FROM suppliers WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find supplier", e))
    }

    async fn create(&self, s: &Supplier) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO suppliers (name, legal_address, actual_address, warehouse_address, \
             contact_person, phone, email, website, contract_number, product_categories, \
             purchase_amount, balance, product_types, comments, files, country, region, tax_id, \
             bank_details, registration_date, payment_terms, is_active, other_fields, company_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, \
             $18, $19, $20, $21, $22, $23, $24) RETURNING id",
        )
        .bind(&s.name)
        .bind(&s.legal_address)
        .bind(&s.actual_address)
        .bind(&s.warehouse_address)
        .bind(&s.contact_person)
        .bind(&s.phone)
        .bind(&s.email)
        .bind(&s.website)
        .bind(&s.contract_number)
        .bind(&s.product_categories)
        .bind(s.purchase_amount)
        .bind(s.balance)
        .bind(s.product_types)
        .bind(&s.comments)
        .bind(&s.files)
        .bind(&s.country)
        .bind(&s.region)
        .bind(&s.tax_id)
        .bind(&s.bank_details)
        .bind(s.registration_date)
        .bind(&s.payment_terms)
        .bind(s.is_active)
        .bind(sqlx::types::Json(&s.other_fields))
        .bind(s.company_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create supplier", e))
    }

    async fn update(&self, s: &Supplier) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE suppliers SET name = $2, legal_address = $3, actual_address = $4, \
             warehouse_address = $5, contact_person = $6, phone = $7, email = $8, website = $9, \
             contract_number = $10, product_categories = $11, purchase_amount = $12, balance = $13, \
             product_types = $14, comments = $15, files = $16, country = $17, region = $18, \
             tax_id = $19, bank_details = $20, registration_date = $21, payment_terms = $22, \
             is_active = $23, other_fields = $24 \
             WHERE id = $1 AND company_id = $25",
        )
        .bind(s.id)
        .bind(&s.name)
        .bind(&s.legal_address)
        .bind(&s.actual_address)
        .bind(&s.warehouse_address)
        .bind(&s.contact_person)
        .bind(&s.phone)
        .bind(&s.email)
        .bind(&s.website)
        .bind(&s.contract_number)
        .bind(&s.product_categories)
        .bind(s.purchase_amount)
        .bind(s.balance)
        .bind(s.product_types)
        .bind(&s.comments)
        .bind(&s.files)
        .bind(&s.country)
        .bind(&s.region)
        .bind(&s.tax_id)
        .bind(&s.bank_details)
        .bind(s.registration_date)
        .bind(&s.payment_terms)
        .bind(s.is_active)
        .bind(sqlx::types::Json(&s.other_fields))
        .bind(s.company_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update supplier", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete supplier", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_by_company(&self, company_id: i64) -> AppResult<Vec<Supplier>> {
        sqlx::query_as::<_, Supplier>(&format!(
            "SELECT {COLUMNS} FROM suppliers WHERE company_id = $1 ORDER BY id ASC"
        ))
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list suppliers", e))
    }
}
