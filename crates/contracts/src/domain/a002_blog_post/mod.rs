pub mod aggregate;

pub use aggregate::{Category, Post, PostDto, PostListQuery};
