//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and turning
//! backend responses into `Result<T, String>`.

use contracts::shared::api_error::ApiErrorBody;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/items/123");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

pub fn send_error(e: gloo_net::Error) -> String {
    format!("サーバーに接続できません: {}", e)
}

/// Message for a failed response: the server's `error` field when it sent one
pub async fn error_text(response: Response) -> String {
    let status = response.status();
    match response.json::<ApiErrorBody>().await {
        Ok(body) => message_or_status(Some(body.error), status),
        Err(_) => message_or_status(None, status),
    }
}

fn message_or_status(message: Option<String>, status: u16) -> String {
    match message {
        Some(m) if !m.trim().is_empty() => m,
        _ => format!("リクエストに失敗しました (HTTP {})", status),
    }
}

/// Decode a JSON body, or surface the server's error message
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(error_text(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// For endpoints whose success carries no body worth reading
pub async fn expect_ok(response: Response) -> Result<(), String> {
    if !response.ok() {
        return Err(error_text(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_wins() {
        assert_eq!(
            message_or_status(Some("商品が見つかりません".into()), 404),
            "商品が見つかりません"
        );
    }

    #[test]
    fn test_blank_message_falls_back_to_status() {
        assert_eq!(
            message_or_status(Some("  ".into()), 500),
            "リクエストに失敗しました (HTTP 500)"
        );
        assert_eq!(
            message_or_status(None, 502),
            "リクエストに失敗しました (HTTP 502)"
        );
    }
}
