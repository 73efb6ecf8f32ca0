use anyhow::{Context, Result};
use sea_orm::{ConnectionTrait, DatabaseBackend, QueryResult, Statement};

use crate::shared::data::db::get_connection;

/// Учётная запись (логин/пароль). Профиль хранится отдельно в `users`.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

const SELECT_ACCOUNT: &str =
    "SELECT id, username, email, created_at, last_login_at FROM sys_accounts";

impl TryFrom<QueryResult> for Account {
    type Error = sea_orm::DbErr;

    fn try_from(row: QueryResult) -> Result<Self, Self::Error> {
        Ok(Account {
            id: row.try_get("", "id")?,
            username: row.try_get("", "username")?,
            email: row.try_get("", "email")?,
            created_at: row.try_get("", "created_at")?,
            last_login_at: row.try_get("", "last_login_at")?,
        })
    }
}

pub async fn create_with_password(account: &Account, password_hash: &str) -> Result<()> {
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO sys_accounts (id, username, email, password_hash, created_at, last_login_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            [
                account.id.clone().into(),
                account.username.clone().into(),
                account.email.clone().into(),
                password_hash.to_string().into(),
                account.created_at.clone().into(),
                account.last_login_at.clone().into(),
            ],
        ))
        .await
        .context("Failed to insert account")?;
    Ok(())
}

pub async fn get_by_id(id: &str) -> Result<Option<Account>> {
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            &format!("{} WHERE id = ?", SELECT_ACCOUNT),
            [id.into()],
        ))
        .await?;
    Ok(row.map(Account::try_from).transpose()?)
}

pub async fn get_by_username(username: &str) -> Result<Option<Account>> {
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            &format!("{} WHERE username = ?", SELECT_ACCOUNT),
            [username.into()],
        ))
        .await?;
    Ok(row.map(Account::try_from).transpose()?)
}

pub async fn get_by_email(email: &str) -> Result<Option<Account>> {
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            &format!("{} WHERE email = ?", SELECT_ACCOUNT),
            [email.trim().to_lowercase().into()],
        ))
        .await?;
    Ok(row.map(Account::try_from).transpose()?)
}

pub async fn get_password_hash(account_id: &str) -> Result<Option<String>> {
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT password_hash FROM sys_accounts WHERE id = ?",
            [account_id.into()],
        ))
        .await?;
    match row {
        Some(row) => Ok(Some(row.try_get("", "password_hash")?)),
        None => Ok(None),
    }
}

pub async fn update_last_login(id: &str) -> Result<()> {
    let now = chrono::Utc::now().to_rfc3339();
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "UPDATE sys_accounts SET last_login_at = ? WHERE id = ?",
            [now.into(), id.to_string().into()],
        ))
        .await
        .context("Failed to update last login")?;
    Ok(())
}

/// Hard delete
pub async fn delete(id: &str) -> Result<bool> {
    let result = get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "DELETE FROM sys_accounts WHERE id = ?",
            [id.into()],
        ))
        .await
        .context("Failed to delete account")?;
    Ok(result.rows_affected() > 0)
}

pub async fn count() -> Result<u64> {
    let row = get_connection()
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) AS count FROM sys_accounts".to_string(),
        ))
        .await?;
    match row {
        Some(row) => {
            let count: i64 = row.try_get("", "count")?;
            Ok(count as u64)
        }
        None => Ok(0),
    }
}
