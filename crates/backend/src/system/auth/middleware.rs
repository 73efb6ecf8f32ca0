use axum::{body::Body, extract::Request, http::HeaderMap, middleware::Next, response::Response};
use contracts::system::auth::TokenClaims;

use crate::shared::error::ApiError;
use crate::system::users;

/// `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

async fn claims_from_headers(headers: &HeaderMap) -> Result<TokenClaims, ApiError> {
    let token = bearer_token(headers).ok_or(ApiError::Unauthorized)?;
    super::jwt::validate_token(token)
        .await
        .map_err(|_| ApiError::Unauthorized)
}

/// Middleware that requires valid JWT authentication
pub async fn require_auth(mut req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let claims = claims_from_headers(req.headers()).await?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Middleware that requires admin privileges.
///
/// The flag is read from the caller's profile, so revoking admin takes effect
/// without waiting for the access token to expire.
pub async fn require_admin(mut req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let claims = claims_from_headers(req.headers()).await?;

    let profile = users::service::get_by_account(&claims.sub).await?;
    match profile {
        Some(profile) if profile.is_admin => {
            req.extensions_mut().insert(profile);
        }
        _ => {
            tracing::warn!("Admin access denied for {}", claims.username);
            return Err(ApiError::Forbidden);
        }
    }

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert("Authorization", HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert("Authorization", HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);

        headers.insert("Authorization", HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers), Some("abc.def"));
    }
}
