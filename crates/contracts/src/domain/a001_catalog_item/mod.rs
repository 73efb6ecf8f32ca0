pub mod aggregate;
pub mod engine;
pub mod presentation;
pub mod query;

pub use aggregate::{CatalogItem, CatalogItemDto, CatalogItemPatch};
pub use engine::derive_view;
pub use query::{AvailabilityFilter, QueryState, SortOrder};
