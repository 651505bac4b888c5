//! Route definitions for the warehouse HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::Router;
use axum::routing::{get, post};

use crate::handlers;
use crate::state::AppState;

/// Build the API router with every route, without middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(warehouse_routes())
        .merge(supplier_routes())
        .merge(category_routes())
        .merge(material_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Liveness and dependency health
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}

/// Warehouse CRUD and responsible users
fn warehouse_routes() -> Router<AppState> {
    use handlers::warehouse::*;

    Router::new()
        .route("/warehouses", get(list_warehouses).post(create_warehouse))
        .route(
            "/warehouses/responsible-users",
            get(handlers::user::get_responsible_users),
        )
        .route(
            "/warehouses/{id}",
            get(get_warehouse)
                .put(update_warehouse)
                .delete(delete_warehouse),
        )
}

/// Supplier CRUD
fn supplier_routes() -> Router<AppState> {
    use handlers::supplier::*;

    Router::new()
        .route("/suppliers", get(list_suppliers).post(create_supplier))
        .route(
            "/suppliers/{id}",
            get(get_supplier).put(update_supplier).delete(delete_supplier),
        )
}

/// Category CRUD and search
fn category_routes() -> Router<AppState> {
    use handlers::category::*;

    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route("/categories/search", get(search_categories))
        .route(
            "/categories/{id}",
            get(get_category).put(update_category).delete(delete_category),
        )
}

/// Materials in every partition, lifecycle moves and search
fn material_routes() -> Router<AppState> {
    use handlers::material::*;

    Router::new()
        .route(
            "/materials/planning",
            get(list_planning).post(create_planning),
        )
        .route(
            "/materials/planning/{id}",
            get(get_planning).put(update_planning).delete(delete_planning),
        )
        .route(
            "/materials/planning/{id}/purchase",
            post(move_to_purchased),
        )
        .route(
            "/materials/purchased",
            get(list_purchased).post(create_purchased),
        )
        .route(
            "/materials/purchased/{id}",
            get(get_purchased)
                .put(update_purchased)
                .delete(delete_purchased),
        )
        .route("/materials/purchased/{id}/archive", post(move_to_archive))
        .route("/materials/archive/planning", get(list_planning_archive))
        .route(
            "/materials/archive/planning/{id}",
            get(get_planning_archive).delete(delete_planning_archive),
        )
        .route("/materials/archive/purchased", get(list_purchased_archive))
        .route(
            "/materials/archive/purchased/{id}",
            get(get_purchased_archive).delete(delete_purchased_archive),
        )
        .route("/materials/search", get(search_materials))
}
