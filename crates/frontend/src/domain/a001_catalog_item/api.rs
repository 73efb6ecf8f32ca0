use contracts::domain::a001_catalog_item::{CatalogItem, CatalogItemDto, CatalogItemPatch};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, expect_ok, read_json, send_error};
use crate::system::auth::storage;

fn get_auth_header() -> Result<String, String> {
    storage::bearer_header().ok_or_else(|| "ログインしてください".to_string())
}

/// Whole public catalog; filtering and ordering happen on the client
pub async fn fetch_items() -> Result<Vec<CatalogItem>, String> {
    let response = Request::get(&api_url("/api/items"))
        .send()
        .await
        .map_err(send_error)?;

    read_json(response).await
}

pub async fn fetch_item(id: &str) -> Result<CatalogItem, String> {
    let response = Request::get(&api_url(&format!("/api/items/{}", id)))
        .send()
        .await
        .map_err(send_error)?;

    read_json(response).await
}

pub async fn admin_fetch_items() -> Result<Vec<CatalogItem>, String> {
    let auth_header = get_auth_header()?;

    let response = Request::get(&api_url("/api/admin/items"))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(send_error)?;

    read_json(response).await
}

pub async fn create_item(dto: &CatalogItemDto) -> Result<CatalogItem, String> {
    let auth_header = get_auth_header()?;

    let response = Request::post(&api_url("/api/admin/items"))
        .header("Authorization", &auth_header)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(send_error)?;

    read_json(response).await
}

pub async fn update_item(id: &str, patch: &CatalogItemPatch) -> Result<CatalogItem, String> {
    let auth_header = get_auth_header()?;

    let response = Request::put(&api_url(&format!("/api/admin/items/{}", id)))
        .header("Authorization", &auth_header)
        .json(patch)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(send_error)?;

    read_json(response).await
}

pub async fn delete_item(id: &str) -> Result<(), String> {
    let auth_header = get_auth_header()?;

    let response = Request::delete(&api_url(&format!("/api/admin/items/{}", id)))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(send_error)?;

    expect_ok(response).await
}
