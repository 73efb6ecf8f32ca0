pub mod a001_catalog_item;
pub mod a002_blog_post;
pub mod d001_admin_summary;
pub mod uploads;
