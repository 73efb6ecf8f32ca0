use anyhow::Result;
use chrono::Utc;

use super::repository::{self, Account};
use crate::shared::error::ApiError;
use crate::system::auth::password;

pub fn validate_username(username: &str) -> Result<(), String> {
    let username = username.trim();
    if username.is_empty() {
        return Err("ユーザー名を入力してください".into());
    }
    if username.chars().count() > 64 {
        return Err("ユーザー名は64文字以内で入力してください".into());
    }
    if username.chars().any(char::is_whitespace) {
        return Err("ユーザー名に空白は使用できません".into());
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err("有効なメールアドレスを入力してください".into()),
    }
}

/// Create an account. Validation failures come back as `ApiError::BadRequest`.
pub async fn create(username: &str, password: &str, email: &str) -> Result<Account> {
    validate_username(username).map_err(ApiError::BadRequest)?;
    validate_email(email).map_err(ApiError::BadRequest)?;
    password::validate_password_strength(password).map_err(ApiError::BadRequest)?;

    let username = username.trim();
    if repository::get_by_username(username).await?.is_some() {
        return Err(ApiError::Conflict("このユーザー名は既に使用されています".into()).into());
    }
    if repository::get_by_email(email).await?.is_some() {
        return Err(ApiError::Conflict("このメールアドレスは既に登録されています".into()).into());
    }

    let password_hash = password::hash_password(password)?;
    let account = Account {
        id: uuid::Uuid::new_v4().to_string(),
        username: username.to_string(),
        email: email.trim().to_lowercase(),
        created_at: Utc::now().to_rfc3339(),
        last_login_at: None,
    };
    repository::create_with_password(&account, &password_hash).await?;
    tracing::info!("Account created: {}", account.username);

    Ok(account)
}

/// Verify credentials (for login). `None` means wrong username or password.
pub async fn verify_credentials(username: &str, password: &str) -> Result<Option<Account>> {
    let account = match repository::get_by_username(username.trim()).await? {
        Some(a) => a,
        None => return Ok(None),
    };

    let password_hash = repository::get_password_hash(&account.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Password hash not found"))?;

    if !password::verify_password(password, &password_hash)? {
        return Ok(None);
    }

    if let Err(e) = repository::update_last_login(&account.id).await {
        tracing::warn!("Failed to update last login for {}: {}", account.id, e);
    }

    Ok(Some(account))
}

pub async fn get_by_id(id: &str) -> Result<Option<Account>> {
    repository::get_by_id(id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("hanako").is_ok());
        assert!(validate_username("  ").is_err());
        assert!(validate_username("hana ko").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@example.com").is_ok());
        assert!(validate_email("a@localhost").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("example.com").is_err());
    }
}
