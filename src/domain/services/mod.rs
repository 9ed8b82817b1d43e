pub mod navigator;
pub mod preview_service;
pub mod user_context;
