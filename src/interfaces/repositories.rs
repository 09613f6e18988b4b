pub mod data_store;
pub mod memory_store;
pub mod repository;
pub mod rest_store;
