use anyhow::Result;
use chrono::Utc;
use contracts::system::users::{AdminUpdateUserDto, UpdateProfileDto, UserProfile};

use super::provisioning::{self, ProfileSeed, Provision};
use super::repository;
use crate::shared::error::ApiError;
use crate::system::accounts::{self, Account};
use crate::system::auth::refresh_tokens;

pub async fn get_by_id(id: &str) -> Result<Option<UserProfile>> {
    repository::get_by_id(id).await
}

pub async fn get_by_account(account_id: &str) -> Result<Option<UserProfile>> {
    repository::get_by_account_id(account_id).await
}

pub async fn list_all() -> Result<Vec<UserProfile>> {
    repository::list_all().await
}

/// Link or create the profile of an account that has none
pub async fn provision_for_account(account: &Account, seed: Option<ProfileSeed>) -> Result<UserProfile> {
    if let Some(profile) = repository::get_by_account_id(&account.id).await? {
        return Ok(profile);
    }

    let same_email = repository::get_by_email(&account.email).await?;
    let owner = match same_email.as_ref().and_then(|p| p.account_id.as_deref()) {
        Some(owner_id) => accounts::service::get_by_id(owner_id).await?,
        None => None,
    };
    if let (Some(profile), Some(owner)) = (&same_email, &owner) {
        tracing::warn!(
            "Profile {} with email {} belongs to account {}; not relinking to {}",
            profile.id,
            account.email,
            owner.username,
            account.username
        );
    }

    let seed = seed.unwrap_or_default();
    match provisioning::decide(account, same_email.as_ref(), owner.as_ref(), &seed) {
        Provision::Relink { profile_id } => {
            tracing::info!(
                "Relinking orphaned profile {} to account {} (same email)",
                profile_id,
                account.username
            );
            repository::link_account(&profile_id, &account.id).await?;
            repository::get_by_id(&profile_id)
                .await?
                .ok_or_else(|| anyhow::anyhow!("Profile {} vanished during relink", profile_id))
        }
        Provision::Create(profile) => {
            tracing::info!("Creating profile for account {}", account.username);
            repository::insert(&profile).await?;
            Ok(profile)
        }
    }
}

/// Own profile of the caller, provisioned on first access
pub async fn get_or_provision_own(account_id: &str) -> Result<UserProfile> {
    if let Some(profile) = repository::get_by_account_id(account_id).await? {
        return Ok(profile);
    }
    let account = accounts::service::get_by_id(account_id)
        .await?
        .ok_or(ApiError::Unauthorized)?;
    provision_for_account(&account, None).await
}

pub async fn is_admin(account_id: &str) -> Result<bool> {
    Ok(repository::get_by_account_id(account_id)
        .await?
        .map(|p| p.is_admin)
        .unwrap_or(false))
}

/// Caller may see/edit `target_id` if it is their own profile or they are admin
pub async fn authorize_access(account_id: &str, target_id: &str) -> Result<()> {
    match repository::get_by_account_id(account_id).await? {
        Some(caller) if caller.id == target_id || caller.is_admin => Ok(()),
        _ => Err(ApiError::Forbidden.into()),
    }
}

pub async fn update_profile(id: &str, dto: UpdateProfileDto) -> Result<UserProfile> {
    dto.validate().map_err(ApiError::BadRequest)?;

    let mut profile = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("ユーザーが見つかりません"))?;

    profile.first_name = dto.first_name.trim().to_string();
    profile.last_name = dto.last_name.trim().to_string();
    profile.phone = dto.phone.trim().to_string();
    profile.bio = non_empty(dto.bio);
    profile.address = non_empty(dto.address);
    profile.updated_at = Utc::now().to_rfc3339();

    repository::update(&profile).await?;
    Ok(profile)
}

pub async fn admin_update(id: &str, dto: AdminUpdateUserDto) -> Result<UserProfile> {
    let mut profile = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("ユーザーが見つかりません"))?;

    if let Some(v) = dto.first_name {
        profile.first_name = v.trim().to_string();
    }
    if let Some(v) = dto.last_name {
        profile.last_name = v.trim().to_string();
    }
    if let Some(v) = dto.phone {
        profile.phone = v.trim().to_string();
    }
    if dto.bio.is_some() {
        profile.bio = non_empty(dto.bio);
    }
    if dto.address.is_some() {
        profile.address = non_empty(dto.address);
    }
    if let Some(is_admin) = dto.is_admin {
        profile.is_admin = is_admin;
    }
    profile.updated_at = Utc::now().to_rfc3339();

    repository::update(&profile).await?;
    tracing::info!("Profile {} updated by admin", profile.id);
    Ok(profile)
}

/// Removes the profile together with its account and sessions
pub async fn delete(id: &str) -> Result<bool> {
    let Some(profile) = repository::get_by_id(id).await? else {
        return Ok(false);
    };
    if let Some(account_id) = profile.account_id.as_deref() {
        refresh_tokens::delete_for_account(account_id).await?;
        accounts::repository::delete(account_id).await?;
    }
    let deleted = repository::delete(id).await?;
    tracing::info!("Profile {} deleted", id);
    Ok(deleted)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::initialize_database;

    fn profile_for(account_id: &str, email: &str) -> UserProfile {
        let now = Utc::now().to_rfc3339();
        UserProfile {
            id: uuid::Uuid::new_v4().to_string(),
            account_id: Some(account_id.to_string()),
            email: email.to_string(),
            first_name: "管理".into(),
            last_name: "者".into(),
            phone: String::new(),
            bio: None,
            address: None,
            is_admin: true,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    // The only test touching the global connection
    #[tokio::test]
    async fn test_sign_up_cannot_take_over_another_profile() {
        let db_file = std::env::temp_dir().join(format!("shikimori-{}.db", uuid::Uuid::new_v4()));
        initialize_database(&db_file).await.unwrap();

        let admin = accounts::service::create("admin", "admin", "admin@example.com")
            .await
            .unwrap();
        let admin_profile = profile_for(&admin.id, "admin@example.com");
        repository::insert(&admin_profile).await.unwrap();

        // Same email as an existing account
        let err = accounts::service::create("mallory", "secret", "Admin@Example.com")
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ApiError>(),
            Some(ApiError::Conflict(_))
        ));

        // Profile email differs from its owner's account email
        let shared = profile_for(&admin.id, "office@example.com");
        let other = accounts::service::create("staff", "staff", "ops@example.com")
            .await
            .unwrap();
        repository::delete(&admin_profile.id).await.unwrap();
        repository::insert(&shared).await.unwrap();
        let newcomer = accounts::service::create("newcomer", "secret", "office@example.com")
            .await
            .unwrap();

        let provisioned = provision_for_account(&newcomer, None).await.unwrap();
        assert_ne!(provisioned.id, shared.id);
        assert!(!provisioned.is_admin);
        let kept = repository::get_by_id(&shared.id).await.unwrap().unwrap();
        assert_eq!(kept.account_id.as_deref(), Some(admin.id.as_str()));

        // Owner gone: the orphaned profile is picked up again
        let orphan = profile_for(&other.id, "ops@example.com");
        repository::insert(&orphan).await.unwrap();
        accounts::repository::delete(&other.id).await.unwrap();
        let returning = Account {
            id: "acc-returning".into(),
            ..other
        };
        let relinked = provision_for_account(&returning, None).await.unwrap();
        assert_eq!(relinked.id, orphan.id);
        assert_eq!(relinked.account_id.as_deref(), Some("acc-returning"));

        let _ = std::fs::remove_file(&db_file);
    }
}
