//! CRUD services for tenant-owned records served through a repository.

pub mod service;

pub use service::{RecordService, SupplierService, WarehouseService};
