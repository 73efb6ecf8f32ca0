use serde::{Deserialize, Serialize};

use crate::domain::a001_catalog_item::CatalogItem;

/// Сводка для главной страницы админки
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminSummary {
    pub item_count: u64,
    pub available_item_count: u64,
    pub user_count: u64,
    pub admin_count: u64,
    pub post_count: u64,
    /// Newest first
    pub recent_items: Vec<CatalogItem>,
}

impl AdminSummary {
    pub const RECENT_ITEMS: usize = 5;

    pub fn unavailable_item_count(&self) -> u64 {
        self.item_count.saturating_sub(self.available_item_count)
    }
}
