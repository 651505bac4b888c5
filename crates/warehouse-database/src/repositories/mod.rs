//! Repository implementations for all warehouse entities.

pub mod category;
pub mod material;
pub mod supplier;
pub mod user;
pub mod warehouse;

pub use category::CategoryRepository;
pub use material::PgMaterialGateway;
pub use supplier::SupplierRepository;
pub use user::UserRepository;
pub use warehouse::WarehouseRepository;
