pub mod auth_repository;
pub mod session_repository;
