// Infrastructure layer - Configuration, storage and rendering adapters
pub mod config;
pub mod html_response;
pub mod memory_repository;
pub mod radar_svg;
