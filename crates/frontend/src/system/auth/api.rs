use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, RegisterRequest, SessionInfo,
    UserInfo,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, expect_ok, read_json, send_error};

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/api/system/auth/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(send_error)?;

    read_json(response).await
}

/// Sign up; the backend signs the new account in right away
pub async fn register(request: RegisterRequest) -> Result<LoginResponse, String> {
    let response = Request::post(&api_url("/api/system/auth/register"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(send_error)?;

    read_json(response).await
}

/// Refresh access token using refresh token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, String> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&api_url("/api/system/auth/refresh"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(send_error)?;

    read_json(response).await
}

/// Logout (revoke refresh token)
pub async fn logout(refresh_token: String) -> Result<(), String> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&api_url("/api/system/auth/logout"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(send_error)?;

    expect_ok(response).await
}

/// Get current user info
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    let response = Request::get(&api_url("/api/system/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(send_error)?;

    read_json(response).await
}

/// Who is calling and whether their profile carries the admin flag.
/// Anonymous callers get a default (signed-out) answer, not an error.
pub async fn fetch_session(access_token: Option<&str>) -> Result<SessionInfo, String> {
    let mut request = Request::get(&api_url("/api/system/auth/session"));
    if let Some(token) = access_token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }
    let response = request.send().await.map_err(send_error)?;

    read_json(response).await
}
