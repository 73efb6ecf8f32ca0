use anyhow::Result;
use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use super::jwt;
use crate::shared::data::db::get_connection;

/// Refresh tokens are stored as SHA-256 hashes only
pub async fn store(account_id: &str, token: &str) -> Result<()> {
    let token_id = uuid::Uuid::new_v4().to_string();
    let expires_at = jwt::calculate_refresh_token_expiration();
    let created_at = Utc::now().to_rfc3339();

    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO sys_refresh_tokens (id, account_id, token_hash, expires_at, created_at)
             VALUES (?, ?, ?, ?, ?)",
            [
                token_id.into(),
                account_id.to_string().into(),
                hash_token(token).into(),
                expires_at.into(),
                created_at.into(),
            ],
        ))
        .await?;
    Ok(())
}

/// Returns the owning account id of a live token
pub async fn validate(token: &str) -> Result<Option<String>> {
    let now = Utc::now().to_rfc3339();
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT account_id FROM sys_refresh_tokens
             WHERE token_hash = ? AND expires_at > ? AND revoked_at IS NULL",
            [hash_token(token).into(), now.into()],
        ))
        .await?;

    match row {
        Some(row) => Ok(Some(row.try_get("", "account_id")?)),
        None => Ok(None),
    }
}

pub async fn revoke(token: &str) -> Result<()> {
    let revoked_at = Utc::now().to_rfc3339();
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "UPDATE sys_refresh_tokens SET revoked_at = ? WHERE token_hash = ?",
            [revoked_at.into(), hash_token(token).into()],
        ))
        .await?;
    Ok(())
}

pub async fn delete_for_account(account_id: &str) -> Result<()> {
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "DELETE FROM sys_refresh_tokens WHERE account_id = ?",
            [account_id.into()],
        ))
        .await?;
    Ok(())
}

fn hash_token(token: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_stable_hex() {
        let a = hash_token("token");
        assert_eq!(a, hash_token("token"));
        assert_eq!(a.len(), 64);
        assert_ne!(a, hash_token("token2"));
    }
}
