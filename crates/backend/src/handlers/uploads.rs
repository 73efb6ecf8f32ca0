use axum::{extract::Multipart, Json};
use serde_json::{json, Value};

use crate::shared::config;
use crate::shared::error::{ApiError, ApiResult};
use crate::shared::uploads;

/// POST /api/upload (multipart, поле `file`)
pub async fn upload_image(mut multipart: Multipart) -> ApiResult<Json<Value>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("不正なリクエストです: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let original_name = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|_| ApiError::bad_request("ファイルサイズは5MB以下にしてください"))?;

        uploads::validate_image(content_type.as_deref(), bytes.len())?;

        let file_name = uploads::stored_file_name(original_name.as_deref());
        let dir = config::get_upload_dir(config::get());
        let url = uploads::save(&dir, &file_name, &bytes).await?;
        return Ok(Json(json!({ "url": url })));
    }

    Err(ApiError::bad_request("ファイルが選択されていません"))
}
