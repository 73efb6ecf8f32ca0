pub mod fallback_image;
pub mod stat_card;
pub mod ui;

pub use fallback_image::FallbackImage;
