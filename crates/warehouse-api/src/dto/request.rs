//! Request DTOs with validation.
//!
//! Numeric query fields default to zero when absent so that a missing
//! bound fails the same range check as an out-of-range one.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use warehouse_core::types::{ListParams, SearchParams};
use warehouse_entity::category::MaterialCategory;
use warehouse_entity::material::MaterialFields;
use warehouse_entity::supplier::Supplier;
use warehouse_entity::warehouse::Warehouse;

/// `?limit=&offset=&company_id=` for paged listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ListQuery {
    /// Page size.
    #[validate(range(min = 1, message = "limit must be positive"))]
    pub limit: i64,
    /// Records to skip.
    #[validate(range(min = 0, message = "offset must not be negative"))]
    pub offset: i64,
    /// Owning tenant.
    #[validate(range(min = 1, message = "company_id must be positive"))]
    pub company_id: i64,
}

impl ListQuery {
    /// Converts to service-level list parameters.
    pub fn into_params(self) -> ListParams {
        ListParams::new(self.limit, self.offset, self.company_id)
    }
}

/// `?query=&limit=&offset=&company_id=` for name searches.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SearchQuery {
    /// Name prefix.
    #[validate(length(min = 1, message = "query is required"))]
    pub query: String,
    /// Page size.
    #[validate(range(min = 1, message = "limit must be positive"))]
    pub limit: i64,
    /// Records to skip.
    #[validate(range(min = 0, message = "offset must not be negative"))]
    pub offset: i64,
    /// Owning tenant.
    #[validate(range(min = 1, message = "company_id must be positive"))]
    pub company_id: i64,
}

impl SearchQuery {
    /// Converts to service-level search parameters.
    pub fn into_params(self) -> SearchParams {
        SearchParams::new(
            self.query,
            ListParams::new(self.limit, self.offset, self.company_id),
        )
    }
}

/// `?company_id=` for tenant-scoped lookups.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CompanyQuery {
    /// Owning tenant.
    #[validate(range(min = 1, message = "company_id must be positive"))]
    pub company_id: i64,
}

/// A record that names the tenant owning it.
pub trait TenantOwned {
    /// The owning tenant.
    fn tenant(&self) -> i64;
}

impl TenantOwned for Warehouse {
    fn tenant(&self) -> i64 {
        self.company_id
    }
}

impl TenantOwned for Supplier {
    fn tenant(&self) -> i64 {
        self.company_id
    }
}

impl TenantOwned for MaterialCategory {
    fn tenant(&self) -> i64 {
        self.company_id
    }
}

impl TenantOwned for MaterialFields {
    fn tenant(&self) -> i64 {
        self.company_id
    }
}

/// Create/update body; rejected unless it names a tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantBody<T>(pub T);

impl<T: TenantOwned> Validate for TenantBody<T> {
    fn validate(&self) -> Result<(), ValidationErrors> {
        if self.0.tenant() >= 1 {
            return Ok(());
        }
        let mut errors = ValidationErrors::new();
        errors.add(
            "company_id",
            ValidationError::new("range").with_message("company_id must be positive".into()),
        );
        Err(errors)
    }
}
