pub mod failure;
pub mod image;
pub mod registration;
pub mod route;
pub mod session;
pub mod user;
