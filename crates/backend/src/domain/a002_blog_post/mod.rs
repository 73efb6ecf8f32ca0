pub mod category_repository;
pub mod repository;
pub mod service;
