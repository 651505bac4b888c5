//! User repository implementation (read-only).

use async_trait::async_trait;
use sqlx::PgPool;

use warehouse_core::error::{AppError, ErrorKind};
use warehouse_core::result::AppResult;
use warehouse_entity::user::User;

use crate::gateway::UserDirectory;

/// Columns loaded into [`User`]; `password_hash` is never selected.
const COLUMNS: &str = "id, company_id, username, name, email, phone, created_at, updated_at, \
     last_login, is_active, role, language, country, is_approved, is_send_system_notification, \
     sections, position";

/// Repository for user lookups.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for UserRepository {
    async fn find_by_sections(&self, company_id: i64, sections: &[&str]) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {COLUMNS} FROM users WHERE company_id = $1 AND sections && $2 ORDER BY id ASC"
        ))
        .bind(company_id)
        .bind(sections)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find users", e))
    }
}
