use axum::{extract::Path, http::StatusCode, Json};
use contracts::system::users::{AdminUpdateUserDto, UpdateProfileDto, UserProfile};

use crate::shared::error::{ApiError, ApiResult};
use crate::system::auth::extractor::CurrentUser;
use crate::system::users::service;

async fn load(id: &str) -> ApiResult<UserProfile> {
    service::get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("ユーザーが見つかりません"))
}

// ---- self or admin ----

/// GET /api/users/:id
pub async fn get_by_id(
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<UserProfile>> {
    service::authorize_access(&claims.sub, &id).await?;
    Ok(Json(load(&id).await?))
}

/// PUT /api/users/:id
pub async fn update(
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
    Json(dto): Json<UpdateProfileDto>,
) -> ApiResult<Json<UserProfile>> {
    service::authorize_access(&claims.sub, &id).await?;
    Ok(Json(service::update_profile(&id, dto).await?))
}

/// DELETE /api/users/:id
pub async fn delete(
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    service::authorize_access(&claims.sub, &id).await?;
    admin_delete(Path(id)).await
}

// ---- admin ----

/// GET /api/admin/users
pub async fn admin_list() -> ApiResult<Json<Vec<UserProfile>>> {
    Ok(Json(service::list_all().await?))
}

/// GET /api/admin/users/:id
pub async fn admin_get(Path(id): Path<String>) -> ApiResult<Json<UserProfile>> {
    Ok(Json(load(&id).await?))
}

/// PUT /api/admin/users/:id
pub async fn admin_update(
    Path(id): Path<String>,
    Json(dto): Json<AdminUpdateUserDto>,
) -> ApiResult<Json<UserProfile>> {
    Ok(Json(service::admin_update(&id, dto).await?))
}

/// DELETE /api/admin/users/:id
pub async fn admin_delete(Path(id): Path<String>) -> ApiResult<StatusCode> {
    if service::delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("ユーザーが見つかりません"))
    }
}
