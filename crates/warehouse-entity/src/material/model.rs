//! Material entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use warehouse_core::result::AppResult;

use super::partition::MaterialPartition;
use crate::extension::ExtensionMap;

/// Column set shared by all four material partitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct MaterialFields {
    /// Warehouse holding the material.
    pub warehouse_id: i64,
    /// Material name, searched by prefix.
    pub name: String,
    /// Invoice the material arrived on.
    pub by_invoice: String,
    /// Article / SKU.
    pub article: String,
    /// Product category label.
    pub product_category: String,
    /// Unit of measure.
    pub unit: String,
    /// Total quantity.
    pub total_quantity: i64,
    /// Volume.
    pub volume: i64,
    /// Unit price excluding VAT.
    pub price_without_vat: f64,
    /// Total cost excluding VAT.
    pub total_without_vat: f64,
    /// Supplier the material is bought from.
    pub supplier_id: i64,
    /// Location inside the warehouse.
    pub location: String,
    /// Contract date.
    pub contract: Option<DateTime<Utc>>,
    /// Attached file reference.
    pub file: String,
    /// Free-form status label.
    pub status: String,
    /// Comments.
    pub comments: String,
    /// Reserved quantity note.
    pub reserve: String,
    /// When the material was received.
    pub received_date: Option<DateTime<Utc>>,
    /// When the record was last updated.
    pub last_updated: Option<DateTime<Utc>>,
    /// Minimum stock level before reordering.
    pub min_stock_level: i64,
    /// Expiration date.
    pub expiration_date: Option<DateTime<Utc>>,
    /// Person accountable for the material.
    pub responsible_person: String,
    /// Storage cost.
    pub storage_cost: f64,
    /// Warehouse section.
    pub warehouse_section: String,
    /// Barcode.
    pub barcode: String,
    /// Incoming delivery number.
    pub incoming_delivery_number: String,
    /// Extension fields.
    #[sqlx(json)]
    pub other_fields: ExtensionMap,
    /// Owning tenant.
    pub company_id: i64,
}

/// A material row as read from any partition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Material {
    /// Identifier local to the partition holding the row.
    #[serde(default)]
    pub id: i64,
    /// Identity carried from Purchased into PurchasedArchive.
    #[serde(default)]
    pub item_id: Option<i64>,
    /// Every other column.
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub fields: MaterialFields,
}

impl Material {
    /// Build an unsaved material from its fields.
    pub fn new(fields: MaterialFields) -> Self {
        Self {
            id: 0,
            item_id: None,
            fields,
        }
    }
}

/// Identifiers assigned by the store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct MaterialIds {
    /// Partition-local id.
    pub id: i64,
    /// Item id, present once the material has been purchased.
    pub item_id: Option<i64>,
}

/// Insert-ready material with its extension document already encoded.
///
/// Encoding once and reusing the draft for every destination keeps the
/// document identical across the inserts of a single move.
#[derive(Debug, Clone)]
pub struct MaterialDraft<'a> {
    /// Item id to store; `None` lets a minting partition assign one.
    pub item_id: Option<i64>,
    /// Fixed columns.
    pub fields: &'a MaterialFields,
    /// Encoded `other_fields`.
    pub other_fields: serde_json::Value,
}

impl<'a> MaterialDraft<'a> {
    /// Encode `fields.other_fields` and pair it with the fields.
    pub fn encode(fields: &'a MaterialFields, item_id: Option<i64>) -> AppResult<Self> {
        let other_fields = serde_json::to_value(&fields.other_fields)?;
        Ok(Self {
            item_id,
            fields,
            other_fields,
        })
    }
}

/// A search result tagged with the partition it was found in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSearchHit {
    /// Partition holding the row.
    pub partition: MaterialPartition,
    /// The matching row.
    #[serde(flatten)]
    pub material: Material,
}
