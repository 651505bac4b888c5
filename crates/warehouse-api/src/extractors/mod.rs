//! Request extractors that reject bad input before a handler runs.

pub mod path;
pub mod validated;

pub use path::EntityId;
pub use validated::{ValidatedJson, ValidatedQuery};
