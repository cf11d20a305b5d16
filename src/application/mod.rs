// Application layer - Use cases and repository seams
pub mod dashboard_service;
pub mod record_repository;
pub mod view_model_builder;
