//! Material CRUD across the four partitions and the lifecycle moves between them.

pub mod lifecycle;
pub mod service;

pub use lifecycle::{MaterialLifecycle, MovedMaterial};
pub use service::MaterialService;
