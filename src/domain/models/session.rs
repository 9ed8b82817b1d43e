use std::fmt;

use crate::domain::{error::DomainError, models::user::UserRecord};

/// Storage key holding the session token
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the signed-in user as json
pub const USER_KEY: &str = "user";

#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::InvalidToken);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

/// Established session after a successful registration
#[derive(Debug, Clone)]
pub struct Session {
    pub token: SessionToken,
    pub user: Option<UserRecord>,
}
