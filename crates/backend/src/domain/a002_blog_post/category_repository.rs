use contracts::domain::a002_blog_post::Category;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Category {
    fn from(m: Model) -> Self {
        Category {
            id: m.id,
            name: m.name,
        }
    }
}

pub async fn list_all() -> anyhow::Result<Vec<Category>> {
    Ok(Entity::find()
        .order_by_asc(Column::Id)
        .all(get_connection())
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn exists(id: i64) -> anyhow::Result<bool> {
    Ok(Entity::find_by_id(id).one(get_connection()).await?.is_some())
}
