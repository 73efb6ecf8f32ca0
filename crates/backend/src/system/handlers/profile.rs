use axum::Json;
use contracts::system::users::{UpdateProfileDto, UserProfile};

use crate::shared::error::ApiResult;
use crate::system::auth::extractor::CurrentUser;
use crate::system::users::service;

/// GET /api/profile/me
pub async fn get_own(CurrentUser(claims): CurrentUser) -> ApiResult<Json<UserProfile>> {
    Ok(Json(service::get_or_provision_own(&claims.sub).await?))
}

/// PUT /api/profile/me
pub async fn update_own(
    CurrentUser(claims): CurrentUser,
    Json(dto): Json<UpdateProfileDto>,
) -> ApiResult<Json<UserProfile>> {
    let profile = service::get_or_provision_own(&claims.sub).await?;
    Ok(Json(service::update_profile(&profile.id, dto).await?))
}
