//! Application builder: wires state, router and middleware into an Axum app.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware as axum_middleware;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use warehouse_cache::{CacheManager, ReadThroughRepository};
use warehouse_core::config::AppConfig;
use warehouse_core::error::AppError;
use warehouse_core::result::AppResult;
use warehouse_core::traits::Repository;
use warehouse_database::DatabasePool;
use warehouse_database::repositories::{
    CategoryRepository, PgMaterialGateway, SupplierRepository, UserRepository,
    WarehouseRepository,
};
use warehouse_entity::supplier::Supplier;
use warehouse_entity::warehouse::Warehouse;
use warehouse_service::{
    CategoryService, MaterialLifecycle, MaterialService, SupplierService, UserService,
    WarehouseService,
};

use crate::middleware::{build_cors_layer, request_logging};
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
///
/// Requests running past `server.request_timeout_seconds` are answered with
/// 504 and their handler is dropped, which rolls back any open transaction.
pub fn build_app(state: AppState) -> Router {
    let server = &state.config.server;
    let timeout = Duration::from_secs(server.request_timeout_seconds);
    let cors = build_cors_layer(&server.cors);

    build_router(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            timeout,
        ))
        .layer(axum_middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Builds the Postgres-backed state: repositories, read-through caches and services.
pub fn build_state(config: AppConfig, db_pool: DatabasePool, cache: CacheManager) -> AppState {
    let pool = db_pool.pool().clone();
    let cache = Arc::new(cache);
    let ttl = cache.default_ttl();

    let warehouse_repo: Arc<dyn Repository<Warehouse>> =
        Arc::new(ReadThroughRepository::<Warehouse>::new(
            Arc::new(WarehouseRepository::new(pool.clone())),
            cache.provider(),
            ttl,
        ));
    let supplier_repo: Arc<dyn Repository<Supplier>> =
        Arc::new(ReadThroughRepository::<Supplier>::new(
            Arc::new(SupplierRepository::new(pool.clone())),
            cache.provider(),
            ttl,
        ));
    let gateway = Arc::new(PgMaterialGateway::new(pool.clone()));

    AppState {
        config: Arc::new(config),
        db_pool,
        cache,
        warehouse_service: Arc::new(WarehouseService::new(warehouse_repo)),
        supplier_service: Arc::new(SupplierService::new(supplier_repo)),
        category_service: Arc::new(CategoryService::new(Arc::new(CategoryRepository::new(
            pool.clone(),
        )))),
        user_service: Arc::new(UserService::new(Arc::new(UserRepository::new(pool)))),
        material_service: Arc::new(MaterialService::new(gateway.clone())),
        lifecycle: Arc::new(MaterialLifecycle::new(gateway)),
    }
}

/// Serves the application until `shutdown` resolves.
pub async fn run_server(
    state: AppState,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> AppResult<()> {
    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("Warehouse server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("Warehouse server stopped");
    Ok(())
}
