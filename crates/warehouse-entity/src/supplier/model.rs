//! Supplier entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use warehouse_core::traits::Entity;

use crate::extension::ExtensionMap;

/// A vendor that materials are purchased from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct Supplier {
    /// Unique supplier identifier (assigned by the store).
    pub id: i64,
    /// Supplier name.
    pub name: String,
    /// Registered legal address.
    pub legal_address: String,
    /// Actual business address.
    pub actual_address: String,
    /// Address of the supplier's own warehouse.
    pub warehouse_address: String,
    /// Contact person.
    pub contact_person: String,
    /// Contact phone.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Website URL.
    pub website: String,
    /// Contract number and date.
    pub contract_number: String,
    /// Categories of goods supplied.
    pub product_categories: String,
    /// Total amount purchased from this supplier.
    pub purchase_amount: f64,
    /// Current balance with the supplier.
    pub balance: f64,
    /// Number of distinct product types supplied.
    pub product_types: i64,
    /// Free-form comments.
    pub comments: String,
    /// Links to attached documents.
    pub files: String,
    /// Country.
    pub country: String,
    /// Region or state.
    pub region: String,
    /// Taxpayer identification number.
    pub tax_id: String,
    /// Bank details.
    pub bank_details: String,
    /// When the supplier was registered.
    pub registration_date: Option<DateTime<Utc>>,
    /// Contractual payment terms.
    pub payment_terms: String,
    /// Whether the supplier is currently active.
    pub is_active: bool,
    /// Extension fields.
    #[sqlx(json)]
    pub other_fields: ExtensionMap,
    /// Owning tenant.
    pub company_id: i64,
}

impl Entity for Supplier {
    const KIND: &'static str = "supplier";

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
