//! Supplier domain entities.

pub mod model;

pub use model::Supplier;
