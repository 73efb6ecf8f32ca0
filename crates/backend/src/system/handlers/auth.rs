use axum::{extract::Json, http::HeaderMap, http::StatusCode};
use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, RegisterRequest, SessionInfo,
    UserInfo,
};

use crate::shared::error::{ApiError, ApiResult};
use crate::system::accounts::{self, Account};
use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::{jwt, middleware::bearer_token, refresh_tokens};
use crate::system::users::{provisioning::ProfileSeed, service as user_service};

async fn issue_tokens(account: Account) -> anyhow::Result<LoginResponse> {
    let profile = user_service::provision_for_account(&account, None).await?;

    let access_token = jwt::generate_access_token(&account.id, &account.username).await?;
    let refresh_token = jwt::generate_refresh_token();
    refresh_tokens::store(&account.id, &refresh_token).await?;

    Ok(LoginResponse {
        access_token,
        refresh_token,
        user: UserInfo {
            id: account.id,
            username: account.username,
            email: account.email,
            is_admin: profile.is_admin,
        },
    })
}

/// POST /api/system/auth/register
pub async fn register(Json(request): Json<RegisterRequest>) -> ApiResult<Json<LoginResponse>> {
    let account =
        accounts::service::create(&request.username, &request.password, &request.email).await?;

    let seed = ProfileSeed {
        first_name: request.first_name,
        last_name: request.last_name,
    };
    user_service::provision_for_account(&account, Some(seed)).await?;

    Ok(Json(issue_tokens(account).await?))
}

/// POST /api/system/auth/login
pub async fn login(Json(request): Json<LoginRequest>) -> ApiResult<Json<LoginResponse>> {
    let account = accounts::service::verify_credentials(&request.username, &request.password)
        .await?
        .ok_or_else(|| {
            tracing::info!("Failed login attempt for {}", request.username);
            ApiError::BadRequest("ユーザー名またはパスワードが正しくありません".into())
        })?;

    Ok(Json(issue_tokens(account).await?))
}

/// POST /api/system/auth/refresh
pub async fn refresh(Json(request): Json<RefreshRequest>) -> ApiResult<Json<RefreshResponse>> {
    let account_id = refresh_tokens::validate(&request.refresh_token)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    let account = accounts::service::get_by_id(&account_id)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    let access_token = jwt::generate_access_token(&account.id, &account.username).await?;
    Ok(Json(RefreshResponse { access_token }))
}

/// POST /api/system/auth/logout
pub async fn logout(Json(request): Json<RefreshRequest>) -> ApiResult<StatusCode> {
    refresh_tokens::revoke(&request.refresh_token).await?;
    Ok(StatusCode::OK)
}

/// GET /api/system/auth/me (protected by middleware)
pub async fn current_user(CurrentUser(claims): CurrentUser) -> ApiResult<Json<UserInfo>> {
    let account = accounts::service::get_by_id(&claims.sub)
        .await?
        .ok_or(ApiError::Unauthorized)?;
    let is_admin = user_service::is_admin(&account.id).await?;

    Ok(Json(UserInfo {
        id: account.id,
        username: account.username,
        email: account.email,
        is_admin,
    }))
}

/// GET /api/system/auth/session
///
/// Never fails on a missing or stale token: that is simply an anonymous session.
pub async fn session(headers: HeaderMap) -> ApiResult<Json<SessionInfo>> {
    let Some(token) = bearer_token(&headers) else {
        return Ok(Json(SessionInfo::default()));
    };
    let Ok(claims) = jwt::validate_token(token).await else {
        return Ok(Json(SessionInfo::default()));
    };

    Ok(Json(SessionInfo {
        is_authenticated: true,
        is_admin: user_service::is_admin(&claims.sub).await?,
    }))
}
