pub mod provisioning;
pub mod repository;
pub mod service;
