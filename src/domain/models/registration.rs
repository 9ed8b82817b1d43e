use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::domain::{
    error::{DomainError, Field},
    models::user::UserRecord,
};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Syntactically checked email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if !EMAIL.is_match(&value) {
            return Err(DomainError::InvalidEmail);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Raw values currently typed into the sign-up form
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignUpFields {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl SignUpFields {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks name, email, then password. The first failure wins.
    pub fn validate(&self) -> Result<ValidatedSignUp, DomainError> {
        if self.full_name.is_empty() {
            return Err(DomainError::EmptyField(Field::Name));
        }
        let email = EmailAddress::new(self.email.clone())?;
        if self.password.is_empty() {
            return Err(DomainError::EmptyField(Field::Password));
        }

        Ok(ValidatedSignUp {
            full_name: self.full_name.clone(),
            email,
            password: self.password.clone(),
        })
    }
}

impl fmt::Debug for SignUpFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpFields")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Fields that passed validation, waiting for the profile image url
pub struct ValidatedSignUp {
    full_name: String,
    email: EmailAddress,
    password: String,
}

impl ValidatedSignUp {
    pub fn into_request(self, profile_image_url: String) -> RegistrationRequest {
        RegistrationRequest {
            full_name: self.full_name,
            email: self.email,
            password: self.password,
            profile_image_url,
        }
    }
}

/// json body for the register endpoint
///
/// Only obtainable through [`ValidatedSignUp::into_request`], so a value of
/// this type always carries a non-empty name and password and a valid email.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    full_name: String,
    email: EmailAddress,
    password: String,
    profile_image_url: String,
}

impl RegistrationRequest {
    pub fn full_name(&self) -> &str {
        &self.full_name
    }
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
    pub fn password(&self) -> &str {
        &self.password
    }
    pub fn profile_image_url(&self) -> &str {
        &self.profile_image_url
    }
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("profile_image_url", &self.profile_image_url)
            .finish()
    }
}

// Response

/// json returned by the image upload endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadResponse {
    pub image_url: Option<String>,
}

/// json returned by the register endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterResponse {
    pub token: Option<String>,
    pub user: Option<UserRecord>,
    pub message: Option<String>,
}

/// String member of a json object, `None` for any other shape
fn string_field(body: &Value, key: &str) -> Option<String> {
    body.get(key).and_then(Value::as_str).map(str::to_string)
}

impl UploadResponse {
    /// Read a success body. Non-object bodies decode like `{}`.
    pub fn from_value(body: &Value) -> Self {
        Self {
            image_url: string_field(body, "imageUrl"),
        }
    }
}

impl RegisterResponse {
    /// Read a success body. Non-object bodies decode like `{}`, and a
    /// `user` that does not parse is dropped without losing the token.
    pub fn from_value(body: &Value) -> Self {
        let user = match body.get("user") {
            None | Some(Value::Null) => None,
            Some(user) => serde_json::from_value(user.clone())
                .map_err(|e| warn!(error = %e, "ignoring unreadable user in register response"))
                .ok(),
        };
        Self {
            token: string_field(body, "token"),
            user,
            message: string_field(body, "message"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("alex@example.com")]
    #[case("a.b+tag@sub.example.co")]
    fn test_email_positive(#[case] email: &str) {
        assert!(EmailAddress::new(email).is_ok());
    }

    #[rstest]
    #[case("foo")]
    #[case("foo@")]
    #[case("@bar.com")]
    #[case("foo@bar")]
    #[case("foo bar@baz.com")]
    #[case("")]
    fn test_email_negative(#[case] email: &str) {
        assert!(matches!(
            EmailAddress::new(email),
            Err(DomainError::InvalidEmail)
        ));
    }

    #[test]
    fn test_validation_reports_name_before_email_negative() {
        let fields = SignUpFields::new("", "not-an-email", "");
        assert!(matches!(
            fields.validate(),
            Err(DomainError::EmptyField(Field::Name))
        ));
    }

    #[test]
    fn test_validation_reports_email_before_password_negative() {
        let fields = SignUpFields::new("Alex", "foo@", "");
        assert!(matches!(fields.validate(), Err(DomainError::InvalidEmail)));
    }

    #[test]
    fn test_validation_reports_missing_password_negative() {
        let fields = SignUpFields::new("Alex", "alex@example.com", "");
        assert!(matches!(
            fields.validate(),
            Err(DomainError::EmptyField(Field::Password))
        ));
    }

    #[test]
    fn test_request_serializes_camel_case_positive() {
        let request = SignUpFields::new("Alex", "alex@example.com", "secret")
            .validate()
            .unwrap()
            .into_request(String::new());

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "fullName": "Alex",
                "email": "alex@example.com",
                "password": "secret",
                "profileImageUrl": ""
            })
        );
    }

    #[test]
    fn test_debug_output_hides_password_positive() {
        let fields = SignUpFields::new("Alex", "alex@example.com", "hunter22");
        assert!(!format!("{:?}", fields).contains("hunter22"));
    }

    #[test]
    fn test_register_response_keeps_token_when_user_is_unreadable_positive() {
        let body = serde_json::json!({
            "token": "abc",
            "user": { "_id": "1", "fullName": ["not", "a", "name"] }
        });

        let response = RegisterResponse::from_value(&body);

        assert_eq!(response.token.as_deref(), Some("abc"));
        assert_eq!(response.user, None);
    }

    #[rstest]
    #[case(Value::String("OK".to_string()))]
    #[case(Value::Null)]
    #[case(serde_json::json!([1, 2]))]
    #[case(serde_json::json!({ "token": 42, "message": false }))]
    fn test_register_response_from_odd_body_negative(#[case] body: Value) {
        assert_eq!(RegisterResponse::from_value(&body), RegisterResponse::default());
    }

    #[test]
    fn test_upload_response_from_value_positive() {
        let body = serde_json::json!({ "imageUrl": "https://x/y.png" });
        assert_eq!(
            UploadResponse::from_value(&body).image_url.as_deref(),
            Some("https://x/y.png")
        );
        assert_eq!(UploadResponse::from_value(&Value::Null).image_url, None);
    }
}
