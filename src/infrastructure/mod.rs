// Infrastructure layer - Configuration and record suppliers
pub mod config;
pub mod memory_repository;
pub mod sample_data;
