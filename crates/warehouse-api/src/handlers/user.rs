//! User lookup handlers.

use axum::Json;
use axum::extract::State;

use warehouse_entity::user::User;

use crate::dto::request::CompanyQuery;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::ValidatedQuery;
use crate::state::AppState;

/// GET /api/warehouses/responsible-users?company_id=
pub async fn get_responsible_users(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<CompanyQuery>,
) -> ApiResult<Json<ApiResponse<Vec<User>>>> {
    let users = state
        .user_service
        .get_responsible_users(query.company_id)
        .await?;
    Ok(Json(ApiResponse::ok(users)))
}
