use contracts::domain::a002_blog_post::{Category, Post, PostDto, PostListQuery};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, expect_ok, read_json, send_error};
use crate::system::auth::storage;

fn get_auth_header() -> Result<String, String> {
    storage::bearer_header().ok_or_else(|| "ログインしてください".to_string())
}

/// One page of published posts, newest first
pub async fn fetch_posts(query: &PostListQuery) -> Result<Vec<Post>, String> {
    let query_string = serde_qs::to_string(query)
        .map_err(|e| format!("Failed to build query: {}", e))?;

    let response = Request::get(&api_url(&format!("/api/posts?{}", query_string)))
        .send()
        .await
        .map_err(send_error)?;

    read_json(response).await
}

pub async fn fetch_post(id: i64) -> Result<Post, String> {
    let response = Request::get(&api_url(&format!("/api/posts/{}", id)))
        .send()
        .await
        .map_err(send_error)?;

    read_json(response).await
}

pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    let response = Request::get(&api_url("/api/categories"))
        .send()
        .await
        .map_err(send_error)?;

    read_json(response).await
}

pub async fn admin_fetch_posts() -> Result<Vec<Post>, String> {
    let auth_header = get_auth_header()?;

    let response = Request::get(&api_url("/api/admin/posts"))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(send_error)?;

    read_json(response).await
}

pub async fn admin_fetch_post(id: i64) -> Result<Post, String> {
    let auth_header = get_auth_header()?;

    let response = Request::get(&api_url(&format!("/api/admin/posts/{}", id)))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(send_error)?;

    read_json(response).await
}

pub async fn create_post(dto: &PostDto) -> Result<Post, String> {
    let auth_header = get_auth_header()?;

    let response = Request::post(&api_url("/api/admin/posts"))
        .header("Authorization", &auth_header)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(send_error)?;

    read_json(response).await
}

pub async fn update_post(id: i64, dto: &PostDto) -> Result<Post, String> {
    let auth_header = get_auth_header()?;

    let response = Request::put(&api_url(&format!("/api/admin/posts/{}", id)))
        .header("Authorization", &auth_header)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(send_error)?;

    read_json(response).await
}

pub async fn delete_post(id: i64) -> Result<(), String> {
    let auth_header = get_auth_header()?;

    let response = Request::delete(&api_url(&format!("/api/admin/posts/{}", id)))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(send_error)?;

    expect_ok(response).await
}
