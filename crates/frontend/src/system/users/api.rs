use contracts::system::users::{AdminUpdateUserDto, UpdateProfileDto, UserProfile};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, expect_ok, read_json, send_error};
use crate::system::auth::storage;

fn get_auth_header() -> Result<String, String> {
    storage::bearer_header().ok_or_else(|| "ログインしてください".to_string())
}

/// Own profile; the backend creates or relinks one on first access
pub async fn fetch_own_profile() -> Result<UserProfile, String> {
    let auth_header = get_auth_header()?;

    let response = Request::get(&api_url("/api/profile/me"))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(send_error)?;

    read_json(response).await
}

pub async fn fetch_profile(id: &str) -> Result<UserProfile, String> {
    let auth_header = get_auth_header()?;

    let response = Request::get(&api_url(&format!("/api/users/{}", id)))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(send_error)?;

    read_json(response).await
}

pub async fn update_profile(id: &str, dto: &UpdateProfileDto) -> Result<UserProfile, String> {
    let auth_header = get_auth_header()?;

    let response = Request::put(&api_url(&format!("/api/users/{}", id)))
        .header("Authorization", &auth_header)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(send_error)?;

    read_json(response).await
}

/// All profiles, newest first (admin)
pub async fn fetch_all_users() -> Result<Vec<UserProfile>, String> {
    let auth_header = get_auth_header()?;

    let response = Request::get(&api_url("/api/admin/users"))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(send_error)?;

    read_json(response).await
}

pub async fn admin_update_user(id: &str, dto: &AdminUpdateUserDto) -> Result<UserProfile, String> {
    let auth_header = get_auth_header()?;

    let response = Request::put(&api_url(&format!("/api/admin/users/{}", id)))
        .header("Authorization", &auth_header)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(send_error)?;

    read_json(response).await
}

pub async fn admin_delete_user(id: &str) -> Result<(), String> {
    let auth_header = get_auth_header()?;

    let response = Request::delete(&api_url(&format!("/api/admin/users/{}", id)))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(send_error)?;

    expect_ok(response).await
}
