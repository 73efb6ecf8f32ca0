use contracts::domain::a001_catalog_item::CatalogItem;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub is_available: bool,
    pub stock: i64,
    pub image_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CatalogItem {
    fn from(m: Model) -> Self {
        CatalogItem {
            id: m.id,
            name: m.name,
            description: m.description,
            // Rows written by other tools may break the invariants; clamp on read
            price: if m.price.is_finite() { m.price.max(0.0) } else { 0.0 },
            category: m.category,
            is_available: m.is_available,
            stock: m.stock.clamp(0, i64::from(u32::MAX)) as u32,
            image_url: m.image_url,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(item: &CatalogItem) -> ActiveModel {
    ActiveModel {
        id: Set(item.id.clone()),
        name: Set(item.name.clone()),
        description: Set(item.description.clone()),
        price: Set(item.price),
        category: Set(item.category.clone()),
        is_available: Set(item.is_available),
        stock: Set(i64::from(item.stock)),
        image_url: Set(item.image_url.clone()),
        created_at: Set(item.created_at.clone()),
        updated_at: Set(item.updated_at.clone()),
    }
}

/// Все позиции, новые первыми
pub async fn list_all() -> anyhow::Result<Vec<CatalogItem>> {
    Ok(Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn list_recent(limit: u64) -> anyhow::Result<Vec<CatalogItem>> {
    Ok(Entity::find()
        .order_by_desc(Column::CreatedAt)
        .limit(limit)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<CatalogItem>> {
    Ok(Entity::find_by_id(id.to_string())
        .one(conn())
        .await?
        .map(Into::into))
}

pub async fn insert(item: &CatalogItem) -> anyhow::Result<()> {
    to_active(item).insert(conn()).await?;
    Ok(())
}

pub async fn update(item: &CatalogItem) -> anyhow::Result<()> {
    let mut active = to_active(item);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

pub async fn delete(id: &str) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.to_string()).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}

pub async fn count_available() -> anyhow::Result<u64> {
    Ok(Entity::find()
        .filter(Column::IsAvailable.eq(true))
        .count(conn())
        .await?)
}
