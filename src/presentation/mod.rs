pub mod components;
pub mod handlers;
