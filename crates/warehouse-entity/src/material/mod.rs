//! Material domain entities.
//!
//! A material lives in exactly one [`MaterialPartition`]; its state is the
//! table that holds the row, not a column on the record.

pub mod model;
pub mod partition;

pub use model::{Material, MaterialDraft, MaterialFields, MaterialIds, MaterialSearchHit};
pub use partition::MaterialPartition;
