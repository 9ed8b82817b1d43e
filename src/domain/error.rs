use std::fmt;

use thiserror::Error;

/// Form field that failed a required-value check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Empty field: {0}")]
    EmptyField(Field),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Invalid image (expected image/*, got {0})")]
    InvalidImage(String),

    #[error("Invalid session token")]
    InvalidToken,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
