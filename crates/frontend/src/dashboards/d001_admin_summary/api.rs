use contracts::dashboards::d001_admin_summary::dto::AdminSummary;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_json, send_error};
use crate::system::auth::storage;

pub async fn fetch_summary() -> Result<AdminSummary, String> {
    let auth_header = storage::bearer_header().ok_or_else(|| "ログインしてください".to_string())?;

    let response = Request::get(&api_url("/api/admin/summary"))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(send_error)?;

    read_json(response).await
}
