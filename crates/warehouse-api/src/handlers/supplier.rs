//! Supplier CRUD handlers.

use axum::Json;
use axum::extract::State;

use warehouse_entity::supplier::Supplier;

use crate::dto::request::{CompanyQuery, TenantBody};
use crate::dto::response::{ApiResponse, CreatedResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{EntityId, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// POST /api/suppliers
pub async fn create_supplier(
    State(state): State<AppState>,
    ValidatedJson(TenantBody(supplier)): ValidatedJson<TenantBody<Supplier>>,
) -> ApiResult<Json<ApiResponse<CreatedResponse>>> {
    let id = state.supplier_service.create(&supplier).await?;
    Ok(Json(ApiResponse::ok(CreatedResponse { id })))
}

/// GET /api/suppliers/{id}
pub async fn get_supplier(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<ApiResponse<Supplier>>> {
    let supplier = state.supplier_service.get_by_id(id).await?;
    Ok(Json(ApiResponse::ok(supplier)))
}

/// GET /api/suppliers?company_id=
pub async fn list_suppliers(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<CompanyQuery>,
) -> ApiResult<Json<ApiResponse<Vec<Supplier>>>> {
    let suppliers = state
        .supplier_service
        .list_by_company(query.company_id)
        .await?;
    Ok(Json(ApiResponse::ok(suppliers)))
}

/// PUT /api/suppliers/{id}
pub async fn update_supplier(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(TenantBody(mut supplier)): ValidatedJson<TenantBody<Supplier>>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    supplier.id = id;
    state.supplier_service.update(&supplier).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Supplier updated"))))
}

/// DELETE /api/suppliers/{id}
pub async fn delete_supplier(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.supplier_service.delete(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Supplier deleted"))))
}
