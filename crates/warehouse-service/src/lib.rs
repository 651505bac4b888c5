//! # warehouse-service
//!
//! Business logic service layer for the warehouse service. Services
//! delegate to repositories and the material gateway; request-shape
//! validation happens at the transport boundary, not here.
//!
//! Services follow constructor injection; all dependencies are provided
//! at construction time via `Arc` references.

pub mod category;
pub mod material;
pub mod record;
pub mod user;

pub use category::CategoryService;
pub use material::{MaterialLifecycle, MaterialService, MovedMaterial};
pub use record::{RecordService, SupplierService, WarehouseService};
pub use user::UserService;
