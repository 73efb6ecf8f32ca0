use contracts::domain::a002_blog_post::Post;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub author_id: String,
    pub category_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Post {
    fn from(m: Model) -> Self {
        Post {
            id: m.id,
            title: m.title,
            content: m.content,
            image_url: m.image_url,
            author_id: m.author_id,
            category_id: m.category_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Страница записей, новые первыми
pub async fn list_page(limit: u64, offset: u64, category: Option<i64>) -> anyhow::Result<Vec<Post>> {
    let mut query = Entity::find();
    if let Some(category_id) = category {
        query = query.filter(Column::CategoryId.eq(category_id));
    }
    Ok(query
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
        .limit(limit)
        .offset(offset)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn list_all() -> anyhow::Result<Vec<Post>> {
    Ok(Entity::find()
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<Post>> {
    Ok(Entity::find_by_id(id).one(conn()).await?.map(Into::into))
}

/// Id is assigned by the database
pub async fn insert(post: &Post) -> anyhow::Result<Post> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        title: Set(post.title.clone()),
        content: Set(post.content.clone()),
        image_url: Set(post.image_url.clone()),
        author_id: Set(post.author_id.clone()),
        category_id: Set(post.category_id),
        created_at: Set(post.created_at.clone()),
        updated_at: Set(post.updated_at.clone()),
    };
    Ok(active.insert(conn()).await?.into())
}

pub async fn update(post: &Post) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(post.id),
        title: Set(post.title.clone()),
        content: Set(post.content.clone()),
        image_url: Set(post.image_url.clone()),
        category_id: Set(post.category_id),
        updated_at: Set(post.updated_at.clone()),
        author_id: sea_orm::ActiveValue::NotSet,
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn delete(id: i64) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}
