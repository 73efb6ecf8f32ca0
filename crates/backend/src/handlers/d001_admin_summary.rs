use axum::Json;
use contracts::dashboards::d001_admin_summary::dto::AdminSummary;

use crate::dashboards::d001_admin_summary;
use crate::shared::error::ApiResult;

/// GET /api/admin/summary
pub async fn get_summary() -> ApiResult<Json<AdminSummary>> {
    Ok(Json(d001_admin_summary::service::build().await?))
}
