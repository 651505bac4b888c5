//! Material handlers for the four partitions, the lifecycle moves and search.
//!
//! Each partition gets thin route handlers over shared helpers that take
//! the partition as an argument.

use axum::Json;
use axum::extract::State;

use warehouse_entity::material::{
    Material, MaterialFields, MaterialIds, MaterialPartition, MaterialSearchHit,
};
use warehouse_service::MovedMaterial;

use crate::dto::request::{ListQuery, SearchQuery, TenantBody};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{EntityId, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

type MaterialBody = ValidatedJson<TenantBody<MaterialFields>>;

async fn create_in(
    state: &AppState,
    partition: MaterialPartition,
    fields: &MaterialFields,
) -> ApiResult<Json<ApiResponse<MaterialIds>>> {
    let ids = state.material_service.create(partition, fields).await?;
    Ok(Json(ApiResponse::ok(ids)))
}

async fn get_in(
    state: &AppState,
    partition: MaterialPartition,
    id: i64,
) -> ApiResult<Json<ApiResponse<Material>>> {
    let material = state.material_service.get_by_id(partition, id).await?;
    Ok(Json(ApiResponse::ok(material)))
}

async fn list_in(
    state: &AppState,
    partition: MaterialPartition,
    query: ListQuery,
) -> ApiResult<Json<ApiResponse<Vec<Material>>>> {
    let materials = state
        .material_service
        .list(partition, &query.into_params())
        .await?;
    Ok(Json(ApiResponse::ok(materials)))
}

async fn update_in(
    state: &AppState,
    partition: MaterialPartition,
    id: i64,
    fields: &MaterialFields,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.material_service.update(partition, id, fields).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(format!(
        "Material updated in {partition}"
    )))))
}

async fn delete_in(
    state: &AppState,
    partition: MaterialPartition,
    id: i64,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.material_service.delete(partition, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(format!(
        "Material deleted from {partition}"
    )))))
}

// ── Planning ───────────────────────────────────────────────

/// POST /api/materials/planning
pub async fn create_planning(
    State(state): State<AppState>,
    ValidatedJson(TenantBody(fields)): MaterialBody,
) -> ApiResult<Json<ApiResponse<MaterialIds>>> {
    create_in(&state, MaterialPartition::Planning, &fields).await
}

/// GET /api/materials/planning?limit=&offset=&company_id=
pub async fn list_planning(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
) -> ApiResult<Json<ApiResponse<Vec<Material>>>> {
    list_in(&state, MaterialPartition::Planning, query).await
}

/// GET /api/materials/planning/{id}
pub async fn get_planning(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<ApiResponse<Material>>> {
    get_in(&state, MaterialPartition::Planning, id).await
}

/// PUT /api/materials/planning/{id}
pub async fn update_planning(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(TenantBody(fields)): MaterialBody,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    update_in(&state, MaterialPartition::Planning, id, &fields).await
}

/// DELETE /api/materials/planning/{id}
pub async fn delete_planning(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    delete_in(&state, MaterialPartition::Planning, id).await
}

/// POST /api/materials/planning/{id}/purchase
pub async fn move_to_purchased(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<ApiResponse<MovedMaterial>>> {
    let moved = state.lifecycle.move_to_purchased(id).await?;
    Ok(Json(ApiResponse::ok(moved)))
}

// ── Purchased ──────────────────────────────────────────────

/// POST /api/materials/purchased
pub async fn create_purchased(
    State(state): State<AppState>,
    ValidatedJson(TenantBody(fields)): MaterialBody,
) -> ApiResult<Json<ApiResponse<MaterialIds>>> {
    create_in(&state, MaterialPartition::Purchased, &fields).await
}

/// GET /api/materials/purchased?limit=&offset=&company_id=
pub async fn list_purchased(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
) -> ApiResult<Json<ApiResponse<Vec<Material>>>> {
    list_in(&state, MaterialPartition::Purchased, query).await
}

/// GET /api/materials/purchased/{id}
pub async fn get_purchased(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<ApiResponse<Material>>> {
    get_in(&state, MaterialPartition::Purchased, id).await
}

/// PUT /api/materials/purchased/{id}
pub async fn update_purchased(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(TenantBody(fields)): MaterialBody,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    update_in(&state, MaterialPartition::Purchased, id, &fields).await
}

/// DELETE /api/materials/purchased/{id}
pub async fn delete_purchased(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    delete_in(&state, MaterialPartition::Purchased, id).await
}

/// POST /api/materials/purchased/{id}/archive
pub async fn move_to_archive(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.lifecycle.move_to_archive(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Material moved to archive",
    ))))
}

// ── Archives ───────────────────────────────────────────────

/// GET /api/materials/archive/planning?limit=&offset=&company_id=
pub async fn list_planning_archive(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
) -> ApiResult<Json<ApiResponse<Vec<Material>>>> {
    list_in(&state, MaterialPartition::PlanningArchive, query).await
}

/// GET /api/materials/archive/planning/{id}
pub async fn get_planning_archive(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<ApiResponse<Material>>> {
    get_in(&state, MaterialPartition::PlanningArchive, id).await
}

/// DELETE /api/materials/archive/planning/{id}
pub async fn delete_planning_archive(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    delete_in(&state, MaterialPartition::PlanningArchive, id).await
}

/// GET /api/materials/archive/purchased?limit=&offset=&company_id=
pub async fn list_purchased_archive(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
) -> ApiResult<Json<ApiResponse<Vec<Material>>>> {
    list_in(&state, MaterialPartition::PurchasedArchive, query).await
}

/// GET /api/materials/archive/purchased/{id}
pub async fn get_purchased_archive(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<ApiResponse<Material>>> {
    get_in(&state, MaterialPartition::PurchasedArchive, id).await
}

/// DELETE /api/materials/archive/purchased/{id}
pub async fn delete_purchased_archive(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    delete_in(&state, MaterialPartition::PurchasedArchive, id).await
}

// ── Search ─────────────────────────────────────────────────

/// GET /api/materials/search?query=&limit=&offset=&company_id=
pub async fn search_materials(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<SearchQuery>,
) -> ApiResult<Json<ApiResponse<Vec<MaterialSearchHit>>>> {
    let hits = state
        .material_service
        .search(&query.into_params())
        .await?;
    Ok(Json(ApiResponse::ok(hits)))
}
