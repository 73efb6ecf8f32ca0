pub mod editor;
pub mod list;

pub use editor::PostEditorPage;
pub use list::AdminPostsPage;
