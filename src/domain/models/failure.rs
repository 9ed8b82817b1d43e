use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::error::{DomainError, Field};

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";
pub const MISSING_TOKEN: &str = "Signup succeeded but no token returned.";

/// Why a registration attempt did not end in a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    MissingField(Field),
    InvalidEmail,
    ServerValidation(Vec<String>),
    ServerMessage(String),
    NetworkError(String),
}

/// Single line shown under the form
impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::MissingField(Field::Name) => f.write_str("Please enter your name"),
            FailureReason::MissingField(Field::Password) => f.write_str("Please enter a password"),
            FailureReason::MissingField(field) => write!(f, "Please enter your {}", field),
            FailureReason::InvalidEmail => f.write_str("Please enter a valid email"),
            FailureReason::ServerValidation(messages) => f.write_str(&messages.join(", ")),
            FailureReason::ServerMessage(message) | FailureReason::NetworkError(message) => {
                f.write_str(message)
            }
        }
    }
}

impl From<DomainError> for FailureReason {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::EmptyField(field) => FailureReason::MissingField(field),
            DomainError::InvalidEmail => FailureReason::InvalidEmail,
            other => FailureReason::NetworkError(other.to_string()),
        }
    }
}

/// One entry of a server-side validation error list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ValidationEntry {
    Detailed { msg: String },
    Plain(String),
    Other(Value),
}

impl ValidationEntry {
    pub fn text(&self) -> String {
        match self {
            ValidationEntry::Detailed { msg } | ValidationEntry::Plain(msg) => msg.clone(),
            ValidationEntry::Other(value) => value.to_string(),
        }
    }
}

/// Failed api call, normalized away from the transport's own error type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: Option<String>,
    pub errors: Option<Vec<ValidationEntry>>,
    pub description: Option<String>,
}

impl ApiError {
    /// The request never produced a response
    pub fn transport(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }

    /// Non-success response. Picks `message` and an `errors` array out of the body.
    pub fn from_response(status: u16, body: &Value) -> Self {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .map(str::to_string);

        let errors = body.get("errors").and_then(Value::as_array).map(|entries| {
            entries
                .iter()
                .map(|entry| {
                    serde_json::from_value(entry.clone())
                        .unwrap_or_else(|_| ValidationEntry::Other(entry.clone()))
                })
                .collect()
        });

        Self {
            status: Some(status),
            message,
            errors,
            description: Some(format!("Request failed with status code {}", status)),
        }
    }
}

/// Map a failed call to what the user is told. Checks `message`, then
/// `errors`, then falls back to the description.
pub fn classify(error: &ApiError) -> FailureReason {
    if let Some(message) = error.message.as_deref().filter(|m| !m.is_empty()) {
        return FailureReason::ServerMessage(message.to_string());
    }

    if let Some(errors) = &error.errors {
        return FailureReason::ServerValidation(errors.iter().map(ValidationEntry::text).collect());
    }

    let description = error
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(GENERIC_FAILURE);
    FailureReason::NetworkError(description.to_string())
}

impl From<ApiError> for FailureReason {
    fn from(error: ApiError) -> Self {
        classify(&error)
    }
}
