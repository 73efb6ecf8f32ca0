use anyhow::Context;
use std::path::Path;

use crate::shared::error::ApiError;

pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
pub const UPLOAD_URL_PREFIX: &str = "/uploads";

/// Проверка загружаемого изображения (тип и размер)
pub fn validate_image(content_type: Option<&str>, size: usize) -> Result<(), ApiError> {
    let is_image = content_type
        .map(|ct| ct.trim().to_ascii_lowercase().starts_with("image/"))
        .unwrap_or(false);
    if !is_image {
        return Err(ApiError::bad_request("画像ファイルのみアップロードできます"));
    }
    if size == 0 {
        return Err(ApiError::bad_request("ファイルが空です"));
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(ApiError::bad_request("ファイルサイズは5MB以下にしてください"));
    }
    Ok(())
}

/// UUID file name, keeping a sane extension of the original name
pub fn stored_file_name(original: Option<&str>) -> String {
    let ext = original
        .and_then(|name| Path::new(name).extension())
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .filter(|e| !e.is_empty() && e.len() <= 5 && e.chars().all(|c| c.is_ascii_alphanumeric()));

    let id = uuid::Uuid::new_v4();
    match ext {
        Some(ext) => format!("{}.{}", id, ext),
        None => id.to_string(),
    }
}

/// Write the file into `dir` and return its public URL
pub async fn save(dir: &Path, file_name: &str, bytes: &[u8]) -> anyhow::Result<String> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create upload dir {}", dir.display()))?;
    let path = dir.join(file_name);
    tokio::fs::write(&path, bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Stored upload {} ({} bytes)", path.display(), bytes.len());
    Ok(format!("{}/{}", UPLOAD_URL_PREFIX, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_images_are_accepted() {
        assert!(validate_image(Some("image/png"), 10).is_ok());
        assert!(validate_image(Some("IMAGE/JPEG"), 10).is_ok());
        assert!(validate_image(Some("application/pdf"), 10).is_err());
        assert!(validate_image(None, 10).is_err());
    }

    #[test]
    fn test_size_limit() {
        assert!(validate_image(Some("image/webp"), MAX_UPLOAD_BYTES).is_ok());
        assert!(validate_image(Some("image/webp"), MAX_UPLOAD_BYTES + 1).is_err());
        assert!(validate_image(Some("image/webp"), 0).is_err());
    }

    #[test]
    fn test_stored_file_name_keeps_extension() {
        let name = stored_file_name(Some("Photo.JPG"));
        assert!(name.ends_with(".jpg"));
        assert!(uuid::Uuid::parse_str(name.trim_end_matches(".jpg")).is_ok());

        let name = stored_file_name(Some("noext"));
        assert!(uuid::Uuid::parse_str(&name).is_ok());

        let name = stored_file_name(Some("evil.p/h"));
        assert!(!name.contains('/'));
    }

    #[tokio::test]
    async fn test_save_writes_file_and_returns_public_url() {
        let dir = std::env::temp_dir().join(format!("uploads-{}", uuid::Uuid::new_v4()));
        let url = save(&dir, "a.png", b"png").await.unwrap();
        assert_eq!(url, "/uploads/a.png");
        assert_eq!(std::fs::read(dir.join("a.png")).unwrap(), b"png");
        let _ = std::fs::remove_dir_all(&dir);
    }
}
