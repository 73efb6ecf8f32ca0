use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use contracts::system::auth::TokenClaims;
use contracts::system::users::UserProfile;

use crate::shared::error::ApiError;

/// Claims of the caller, set by `require_auth` / `require_admin`.
/// Usage in handlers: `async fn handler(CurrentUser(claims): CurrentUser) -> ...`
pub struct CurrentUser(pub TokenClaims);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<TokenClaims>()
            .cloned()
            .map(CurrentUser)
            .ok_or(ApiError::Unauthorized)
    }
}

/// Profile of an administrator, set by `require_admin`
pub struct AdminProfile(pub UserProfile);

#[async_trait]
impl<S> FromRequestParts<S> for AdminProfile
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UserProfile>()
            .cloned()
            .map(AdminProfile)
            .ok_or(ApiError::Forbidden)
    }
}
