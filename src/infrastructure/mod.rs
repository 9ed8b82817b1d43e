pub mod file_session_repository;
pub mod http_auth_repository;
pub mod route_recorder;
pub mod temp_file_preview_provider;
