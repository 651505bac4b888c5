//! Material category handlers. Every call is scoped to a tenant.

use axum::Json;
use axum::extract::State;

use warehouse_entity::category::MaterialCategory;

use crate::dto::request::{CompanyQuery, ListQuery, SearchQuery, TenantBody};
use crate::dto::response::{ApiResponse, CreatedResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{EntityId, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(TenantBody(category)): ValidatedJson<TenantBody<MaterialCategory>>,
) -> ApiResult<Json<ApiResponse<CreatedResponse>>> {
    let id = state.category_service.create(&category).await?;
    Ok(Json(ApiResponse::ok(CreatedResponse { id })))
}

/// GET /api/categories/{id}?company_id=
pub async fn get_category(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedQuery(query): ValidatedQuery<CompanyQuery>,
) -> ApiResult<Json<ApiResponse<MaterialCategory>>> {
    let category = state
        .category_service
        .get_by_id(id, query.company_id)
        .await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// GET /api/categories?limit=&offset=&company_id=
pub async fn list_categories(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
) -> ApiResult<Json<ApiResponse<Vec<MaterialCategory>>>> {
    let categories = state.category_service.list(&query.into_params()).await?;
    Ok(Json(ApiResponse::ok(categories)))
}

/// GET /api/categories/search?query=&limit=&offset=&company_id=
pub async fn search_categories(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<SearchQuery>,
) -> ApiResult<Json<ApiResponse<Vec<MaterialCategory>>>> {
    let categories = state.category_service.search(&query.into_params()).await?;
    Ok(Json(ApiResponse::ok(categories)))
}

/// PUT /api/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(TenantBody(mut category)): ValidatedJson<TenantBody<MaterialCategory>>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    category.id = id;
    state.category_service.update(&category).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Category updated"))))
}

/// DELETE /api/categories/{id}?company_id=
pub async fn delete_category(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedQuery(query): ValidatedQuery<CompanyQuery>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.category_service.delete(id, query.company_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Category deleted"))))
}
