use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a002_blog_post::{Category, Post, PostDto, PostListQuery};

use crate::domain::a002_blog_post;
use crate::shared::error::ApiResult;
use crate::system::auth::extractor::AdminProfile;

/// GET /api/posts?limit&offset&category
pub async fn list_page(Query(query): Query<PostListQuery>) -> ApiResult<Json<Vec<Post>>> {
    Ok(Json(a002_blog_post::service::list_page(query).await?))
}

/// GET /api/posts/:id
pub async fn get_by_id(Path(id): Path<i64>) -> ApiResult<Json<Post>> {
    Ok(Json(a002_blog_post::service::get_by_id(id).await?))
}

/// GET /api/categories
pub async fn list_categories() -> ApiResult<Json<Vec<Category>>> {
    Ok(Json(a002_blog_post::service::list_categories().await?))
}

/// GET /api/admin/posts
pub async fn admin_list() -> ApiResult<Json<Vec<Post>>> {
    Ok(Json(a002_blog_post::service::list_all().await?))
}

/// POST /api/admin/posts
pub async fn create(
    AdminProfile(author): AdminProfile,
    Json(dto): Json<PostDto>,
) -> ApiResult<(StatusCode, Json<Post>)> {
    let post = a002_blog_post::service::create(dto, &author.id).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/admin/posts/:id
pub async fn update(Path(id): Path<i64>, Json(dto): Json<PostDto>) -> ApiResult<Json<Post>> {
    Ok(Json(a002_blog_post::service::update(id, dto).await?))
}

/// DELETE /api/admin/posts/:id
pub async fn delete(Path(id): Path<i64>) -> ApiResult<StatusCode> {
    a002_blog_post::service::delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
