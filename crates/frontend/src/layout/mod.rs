pub mod admin;
pub mod footer;
pub mod header;
pub mod modal_service;
pub mod notifications;

pub use admin::AdminLayout;
pub use modal_service::{ModalHost, ModalService};
pub use notifications::NotificationHost;
