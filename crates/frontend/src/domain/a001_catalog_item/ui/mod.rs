pub mod admin;
pub mod card;
pub mod details;
pub mod list;
