use std::sync::Arc;

use crate::{
    domain::{
        models::{
            failure::FailureReason, registration::SignUpFields, session::Session,
        },
        repositories::{auth_repository::AuthRepository, session_repository::SessionRepository},
        services::{navigator::Navigator, preview_service::PreviewProvider},
    },
    presentation::components::profile_photo_selector::ProfilePhotoSelector,
    usecase::register_user_usecase::RegisterUserUsecase,
};

/// Where the form is in its submit cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    Succeeded,
    Failed(FailureReason),
}

/// Sign-up screen state: field values, photo picker and the error line
pub struct SignUpForm {
    pub fields: SignUpFields,
    pub photo: ProfilePhotoSelector,
    state: FormState,
    error: Option<String>,
}

impl SignUpForm {
    pub fn new(preview_provider: Arc<dyn PreviewProvider>) -> Self {
        Self {
            fields: SignUpFields::default(),
            photo: ProfilePhotoSelector::new(preview_provider),
            state: FormState::Idle,
            error: None,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Error line shown under the inputs
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit the current values. The form stays usable afterwards whatever
    /// the outcome.
    pub async fn handle_sign_up<A, S, N>(
        &mut self,
        usecase: &RegisterUserUsecase<A, S, N>,
    ) -> Option<Session>
    where
        A: AuthRepository + Send + Sync,
        S: SessionRepository + Send + Sync,
        N: Navigator + Send + Sync,
    {
        self.error = None;
        self.state = FormState::Submitting;

        match usecase
            .submit_registration(&self.fields, self.photo.image())
            .await
        {
            Ok(session) => {
                self.state = FormState::Succeeded;
                Some(session)
            }
            Err(reason) => {
                self.error = Some(reason.to_string());
                self.state = FormState::Failed(reason);
                None
            }
        }
    }

    pub fn render(&self) -> String {
        let mut lines = vec![
            "Create an Account".to_string(),
            "Join us today by entering your details below.".to_string(),
            self.photo.render(),
            format!("Full Name: {}", self.fields.full_name),
            format!("Email Address: {}", self.fields.email),
            format!("Password: {}", "*".repeat(self.fields.password.chars().count())),
        ];
        if let Some(error) = &self.error {
            lines.push(format!("! {}", error));
        }
        lines.push("Already have an account? Login".to_string());
        lines.join("\n")
    }
}
