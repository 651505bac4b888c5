//! Shared application state passed to every handler.

use std::sync::Arc;

use warehouse_cache::CacheManager;
use warehouse_core::config::AppConfig;
use warehouse_database::DatabasePool;
use warehouse_service::{
    CategoryService, MaterialLifecycle, MaterialService, SupplierService, UserService,
    WarehouseService,
};

/// Handles to configuration, infrastructure and services.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Database pool, used for health reporting.
    pub db_pool: DatabasePool,
    /// Cache manager, used for health reporting.
    pub cache: Arc<CacheManager>,
    /// Warehouse CRUD.
    pub warehouse_service: Arc<WarehouseService>,
    /// Supplier CRUD.
    pub supplier_service: Arc<SupplierService>,
    /// Category CRUD and search.
    pub category_service: Arc<CategoryService>,
    /// User lookups.
    pub user_service: Arc<UserService>,
    /// Material CRUD and search.
    pub material_service: Arc<MaterialService>,
    /// Material moves between partitions.
    pub lifecycle: Arc<MaterialLifecycle>,
}
