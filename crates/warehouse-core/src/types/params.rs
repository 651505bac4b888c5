//! Paging and tenant-scoping parameters for list and search operations.
//!
//! Bounds (`limit > 0`, `offset >= 0`, `company_id > 0`) are checked at the
//! transport boundary before a call reaches the service layer.

use serde::{Deserialize, Serialize};

/// Parameters for a tenant-scoped page of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    /// Maximum number of records returned.
    pub limit: i64,
    /// Number of records skipped.
    pub offset: i64,
    /// Owning tenant.
    pub company_id: i64,
}

impl ListParams {
    /// Create list parameters.
    pub fn new(limit: i64, offset: i64, company_id: i64) -> Self {
        Self {
            limit,
            offset,
            company_id,
        }
    }
}

/// Parameters for a tenant-scoped name-prefix search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// The name prefix to match, case-insensitively.
    pub query: String,
    /// Paging and tenant scope.
    #[serde(flatten)]
    pub page: ListParams,
}

impl SearchParams {
    /// Create search parameters.
    pub fn new(query: impl Into<String>, page: ListParams) -> Self {
        Self {
            query: query.into(),
            page,
        }
    }

    /// The query as a `LIKE` pattern matching names that start with it.
    ///
    /// `%`, `_` and `\` in the query match literally.
    pub fn like_prefix(&self) -> String {
        let mut pattern = String::with_capacity(self.query.len() + 1);
        for ch in self.query.chars() {
            if matches!(ch, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }
}
