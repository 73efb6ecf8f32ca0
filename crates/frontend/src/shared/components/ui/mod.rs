pub mod badge;

pub use badge::{AvailabilityBadge, Badge};
