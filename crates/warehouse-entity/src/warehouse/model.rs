//! Warehouse entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use warehouse_core::traits::Entity;

use crate::extension::ExtensionMap;

/// A physical storage site owned by a company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct Warehouse {
    /// Unique warehouse identifier (assigned by the store).
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Person accountable for the site.
    pub responsible_person: String,
    /// Contact phone.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Maximum capacity in storage units.
    pub max_capacity: i64,
    /// Units currently occupied.
    pub current_occupancy: i64,
    /// Extension fields.
    #[sqlx(json)]
    pub other_fields: ExtensionMap,
    /// Country of the site.
    pub country: String,
    /// Owning tenant.
    pub company_id: i64,
}

impl Warehouse {
    /// Remaining free capacity, never negative.
    pub fn free_capacity(&self) -> i64 {
        (self.max_capacity - self.current_occupancy).max(0)
    }
}

impl Entity for Warehouse {
    const KIND: &'static str = "warehouse";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn company_id(&self) -> i64 {
        self.company_id
    }
}
