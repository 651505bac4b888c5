//! # warehouse-entity
//!
//! Domain entity models for the warehouse service. Every struct in this
//! crate represents a database table row or a domain value object. All
//! entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and
//! database entities additionally derive `sqlx::FromRow`.

pub mod category;
pub mod extension;
pub mod material;
pub mod supplier;
pub mod user;
pub mod warehouse;

pub use extension::ExtensionMap;
