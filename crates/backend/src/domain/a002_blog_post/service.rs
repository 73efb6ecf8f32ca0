use chrono::Utc;
use contracts::domain::a002_blog_post::{Category, Post, PostDto, PostListQuery};

use super::{category_repository, repository};
use crate::shared::error::ApiError;

fn not_found() -> ApiError {
    ApiError::not_found("記事が見つかりません")
}

/// Untrusted HTML from the editor: keep formatting, drop scripts and handlers
pub fn sanitize_content(content: &str) -> String {
    ammonia::clean(content.trim())
}

async fn check_category(category_id: Option<i64>) -> anyhow::Result<()> {
    if let Some(id) = category_id {
        if !category_repository::exists(id).await? {
            return Err(ApiError::bad_request("カテゴリーが存在しません").into());
        }
    }
    Ok(())
}

pub async fn list_page(query: PostListQuery) -> anyhow::Result<Vec<Post>> {
    repository::list_page(query.limit(), query.offset(), query.category).await
}

pub async fn list_all() -> anyhow::Result<Vec<Post>> {
    repository::list_all().await
}

pub async fn get_by_id(id: i64) -> anyhow::Result<Post> {
    Ok(repository::get_by_id(id).await?.ok_or_else(not_found)?)
}

pub async fn list_categories() -> anyhow::Result<Vec<Category>> {
    category_repository::list_all().await
}

pub async fn create(dto: PostDto, author_id: &str) -> anyhow::Result<Post> {
    dto.validate().map_err(ApiError::BadRequest)?;
    check_category(dto.category_id).await?;

    let now = Utc::now().to_rfc3339();
    let draft = Post {
        id: 0,
        title: dto.title.trim().to_string(),
        content: sanitize_content(&dto.content),
        image_url: dto.normalized_image_url(),
        author_id: author_id.to_string(),
        category_id: dto.category_id,
        created_at: now.clone(),
        updated_at: now,
    };
    let post = repository::insert(&draft).await?;
    tracing::info!("Post created: #{} {}", post.id, post.title);
    Ok(post)
}

pub async fn update(id: i64, dto: PostDto) -> anyhow::Result<Post> {
    dto.validate().map_err(ApiError::BadRequest)?;
    check_category(dto.category_id).await?;

    let mut post = repository::get_by_id(id).await?.ok_or_else(not_found)?;
    post.title = dto.title.trim().to_string();
    post.content = sanitize_content(&dto.content);
    post.image_url = dto.normalized_image_url();
    post.category_id = dto.category_id;
    post.updated_at = Utc::now().to_rfc3339();

    repository::update(&post).await?;
    Ok(post)
}

pub async fn delete(id: i64) -> anyhow::Result<()> {
    if repository::delete(id).await? {
        tracing::info!("Post deleted: #{}", id);
        Ok(())
    } else {
        Err(not_found().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_formatting_drops_scripts() {
        let clean = sanitize_content(
            "<p onclick=\"x()\">営業時間<b>変更</b></p><script>alert(1)</script>",
        );
        assert!(clean.contains("<b>変更</b>"));
        assert!(!clean.contains("script"));
        assert!(!clean.contains("onclick"));
    }
}
