//! Client side of the expense tracker: account registration, session and
//! identity state, profile photo handling and the side menu.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod usecase;
