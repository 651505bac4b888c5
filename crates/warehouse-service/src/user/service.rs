//! Read-only user queries.

use std::sync::Arc;

use warehouse_core::result::AppResult;
use warehouse_database::UserDirectory;
use warehouse_entity::user::{Section, User};

/// Answers questions about a tenant's users.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User lookup.
    repo: Arc<dyn UserDirectory>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repo: Arc<dyn UserDirectory>) -> Self {
        Self { repo }
    }

    /// Users of a tenant who may take responsibility for purchases.
    pub async fn get_responsible_users(&self, company_id: i64) -> AppResult<Vec<User>> {
        self.repo
            .find_by_sections(company_id, &Section::PURCHASE_RESPONSIBLE)
            .await
    }
}
