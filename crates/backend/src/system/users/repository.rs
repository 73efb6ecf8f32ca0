use chrono::Utc;
use contracts::system::users::UserProfile;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub account_id: Option<String>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub bio: Option<String>,
    pub address: Option<String>,
    pub is_admin: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for UserProfile {
    fn from(m: Model) -> Self {
        UserProfile {
            id: m.id,
            account_id: m.account_id,
            email: m.email,
            first_name: m.first_name,
            last_name: m.last_name,
            phone: m.phone,
            bio: m.bio,
            address: m.address,
            is_admin: m.is_admin,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(p: &UserProfile) -> ActiveModel {
    ActiveModel {
        id: Set(p.id.clone()),
        account_id: Set(p.account_id.clone()),
        email: Set(p.email.clone()),
        first_name: Set(p.first_name.clone()),
        last_name: Set(p.last_name.clone()),
        phone: Set(p.phone.clone()),
        bio: Set(p.bio.clone()),
        address: Set(p.address.clone()),
        is_admin: Set(p.is_admin),
        created_at: Set(p.created_at.clone()),
        updated_at: Set(p.updated_at.clone()),
    }
}

/// Newest first
pub async fn list_all() -> anyhow::Result<Vec<UserProfile>> {
    Ok(Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<UserProfile>> {
    Ok(Entity::find_by_id(id.to_string())
        .one(conn())
        .await?
        .map(Into::into))
}

pub async fn get_by_account_id(account_id: &str) -> anyhow::Result<Option<UserProfile>> {
    Ok(Entity::find()
        .filter(Column::AccountId.eq(account_id))
        .one(conn())
        .await?
        .map(Into::into))
}

pub async fn get_by_email(email: &str) -> anyhow::Result<Option<UserProfile>> {
    Ok(Entity::find()
        .filter(Column::Email.eq(email.trim().to_lowercase()))
        .one(conn())
        .await?
        .map(Into::into))
}

pub async fn insert(profile: &UserProfile) -> anyhow::Result<()> {
    to_active(profile).insert(conn()).await?;
    Ok(())
}

pub async fn update(profile: &UserProfile) -> anyhow::Result<()> {
    let mut active = to_active(profile);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

pub async fn link_account(id: &str, account_id: &str) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::AccountId, Expr::value(account_id))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now().to_rfc3339()))
        .filter(Column::Id.eq(id))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

pub async fn set_admin(id: &str, is_admin: bool) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsAdmin, Expr::value(is_admin))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now().to_rfc3339()))
        .filter(Column::Id.eq(id))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

pub async fn delete(id: &str) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.to_string()).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}

pub async fn count_admins() -> anyhow::Result<u64> {
    Ok(Entity::find()
        .filter(Column::IsAdmin.eq(true))
        .count(conn())
        .await?)
}
