use super::repository;
use contracts::domain::a001_catalog_item::{CatalogItem, CatalogItemDto, CatalogItemPatch};

use crate::shared::error::ApiError;

fn not_found() -> ApiError {
    ApiError::not_found("商品が見つかりません")
}

/// Создание новой позиции (значения по умолчанию: в продаже, остаток 0)
pub async fn create(dto: CatalogItemDto) -> anyhow::Result<CatalogItem> {
    let item = CatalogItem::new_for_insert(dto).map_err(ApiError::BadRequest)?;
    repository::insert(&item).await?;
    tracing::info!("Catalog item created: {} ({})", item.name, item.id);
    Ok(item)
}

/// Частичное обновление; `updated_at` сдвигается
pub async fn update(id: &str, patch: CatalogItemPatch) -> anyhow::Result<CatalogItem> {
    let mut item = repository::get_by_id(id).await?.ok_or_else(not_found)?;
    item.apply_patch(&patch).map_err(ApiError::BadRequest)?;
    repository::update(&item).await?;
    Ok(item)
}

pub async fn delete(id: &str) -> anyhow::Result<()> {
    if repository::delete(id).await? {
        tracing::info!("Catalog item deleted: {}", id);
        Ok(())
    } else {
        Err(not_found().into())
    }
}

pub async fn get_by_id(id: &str) -> anyhow::Result<CatalogItem> {
    Ok(repository::get_by_id(id).await?.ok_or_else(not_found)?)
}

/// Весь каталог. Фильтрация и сортировка выполняются на клиенте.
pub async fn list_all() -> anyhow::Result<Vec<CatalogItem>> {
    repository::list_all().await
}
