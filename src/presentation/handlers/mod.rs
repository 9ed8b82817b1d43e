pub mod side_menu_handler;
pub mod sign_up_handler;
