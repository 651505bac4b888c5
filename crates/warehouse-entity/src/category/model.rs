//! Material category entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A tenant-defined grouping of materials.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct MaterialCategory {
    /// Unique category identifier.
    pub id: i64,
    /// Category name, searched by prefix.
    pub name: String,
    /// Owning tenant.
    pub company_id: i64,
    /// Description.
    pub description: String,
    /// URL-friendly identifier.
    pub slug: String,
    /// When the category was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the category was last updated.
    pub updated_at: Option<DateTime<Utc>>,
    /// Whether the category is offered for new materials.
    pub is_active: bool,
    /// Image reference.
    pub img_url: String,
}
