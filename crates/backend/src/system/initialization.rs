use anyhow::Result;

use crate::shared::config::AuthConfig;
use crate::system::{accounts, users};

/// Создать администратора по умолчанию, если нет ни одной учётной записи
pub async fn ensure_admin_user_exists(auth: &AuthConfig) -> Result<()> {
    let count = accounts::repository::count().await?;
    if count > 0 {
        return Ok(());
    }

    tracing::info!("No accounts found. Creating default administrator...");

    let account = accounts::service::create(
        &auth.admin_username,
        &auth.admin_password,
        &auth.admin_email,
    )
    .await?;
    let profile = users::service::provision_for_account(&account, None).await?;
    users::repository::set_admin(&profile.id, true).await?;

    tracing::warn!("═══════════════════════════════════════════════");
    tracing::warn!("  Default administrator created!");
    tracing::warn!("  Username: {}", account.username);
    tracing::warn!("  Account ID: {}", account.id);
    tracing::warn!("  ⚠️  PLEASE CHANGE THE PASSWORD IMMEDIATELY!");
    tracing::warn!("═══════════════════════════════════════════════");

    Ok(())
}
