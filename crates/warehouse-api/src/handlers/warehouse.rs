//! Warehouse CRUD handlers.

use axum::Json;
use axum::extract::State;

use warehouse_entity::warehouse::Warehouse;

use crate::dto::request::{CompanyQuery, TenantBody};
use crate::dto::response::{ApiResponse, CreatedResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{EntityId, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// POST /api/warehouses
pub async fn create_warehouse(
    State(state): State<AppState>,
    ValidatedJson(TenantBody(warehouse)): ValidatedJson<TenantBody<Warehouse>>,
) -> ApiResult<Json<ApiResponse<CreatedResponse>>> {
    let id = state.warehouse_service.create(&warehouse).await?;
    Ok(Json(ApiResponse::ok(CreatedResponse { id })))
}

/// GET /api/warehouses/{id}
pub async fn get_warehouse(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<ApiResponse<Warehouse>>> {
    let warehouse = state.warehouse_service.get_by_id(id).await?;
    Ok(Json(ApiResponse::ok(warehouse)))
}

/// GET /api/warehouses?company_id=
pub async fn list_warehouses(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<CompanyQuery>,
) -> ApiResult<Json<ApiResponse<Vec<Warehouse>>>> {
    let warehouses = state
        .warehouse_service
        .list_by_company(query.company_id)
        .await?;
    Ok(Json(ApiResponse::ok(warehouses)))
}

/// PUT /api/warehouses/{id}
pub async fn update_warehouse(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(TenantBody(mut warehouse)): ValidatedJson<TenantBody<Warehouse>>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    warehouse.id = id;
    state.warehouse_service.update(&warehouse).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Warehouse updated"))))
}

/// DELETE /api/warehouses/{id}
pub async fn delete_warehouse(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.warehouse_service.delete(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Warehouse deleted"))))
}
