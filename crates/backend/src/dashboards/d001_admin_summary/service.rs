use contracts::dashboards::d001_admin_summary::dto::AdminSummary;

use crate::domain::{a001_catalog_item, a002_blog_post};
use crate::system::users;

/// Сводные счётчики для главной страницы админки
pub async fn build() -> anyhow::Result<AdminSummary> {
    Ok(AdminSummary {
        item_count: a001_catalog_item::repository::count().await?,
        available_item_count: a001_catalog_item::repository::count_available().await?,
        user_count: users::repository::count().await?,
        admin_count: users::repository::count_admins().await?,
        post_count: a002_blog_post::repository::count().await?,
        recent_items: a001_catalog_item::repository::list_recent(AdminSummary::RECENT_ITEMS as u64)
            .await?,
    })
}
