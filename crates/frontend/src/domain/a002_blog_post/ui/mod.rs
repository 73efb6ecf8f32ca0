pub mod admin;
pub mod details;
pub mod list;

use contracts::domain::a002_blog_post::Category;

/// Name of a post's category, if it still exists
pub fn category_name(categories: &[Category], category_id: Option<i64>) -> Option<String> {
    let id = category_id?;
    categories.iter().find(|c| c.id == id).map(|c| c.name.clone())
}
