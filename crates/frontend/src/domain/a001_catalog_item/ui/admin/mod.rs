pub mod form;
pub mod list;

pub use list::AdminItemsPage;
