use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_catalog_item::{CatalogItem, CatalogItemDto, CatalogItemPatch};

use crate::domain::a001_catalog_item;
use crate::shared::error::ApiResult;

/// GET /api/items (также /api/admin/items)
pub async fn list_all() -> ApiResult<Json<Vec<CatalogItem>>> {
    Ok(Json(a001_catalog_item::service::list_all().await?))
}

/// GET /api/items/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiResult<Json<CatalogItem>> {
    Ok(Json(a001_catalog_item::service::get_by_id(&id).await?))
}

/// POST /api/admin/items
pub async fn create(Json(dto): Json<CatalogItemDto>) -> ApiResult<(StatusCode, Json<CatalogItem>)> {
    let item = a001_catalog_item::service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/admin/items/:id
pub async fn update(
    Path(id): Path<String>,
    Json(patch): Json<CatalogItemPatch>,
) -> ApiResult<Json<CatalogItem>> {
    Ok(Json(a001_catalog_item::service::update(&id, patch).await?))
}

/// DELETE /api/admin/items/:id
pub async fn delete(Path(id): Path<String>) -> ApiResult<StatusCode> {
    a001_catalog_item::service::delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
