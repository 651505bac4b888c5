//! Material category domain entities.

pub mod model;

pub use model::MaterialCategory;
