//! Warehouse domain entities.

pub mod model;

pub use model::Warehouse;
