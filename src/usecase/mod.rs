pub mod logout_usecase;
pub mod register_user_usecase;
pub mod restore_session_usecase;

#[cfg(test)]
pub(crate) mod mocks;
