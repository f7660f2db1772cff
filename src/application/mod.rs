// Application layer - Use cases and repository seams
pub mod dashboard_service;
pub mod site_repository;
