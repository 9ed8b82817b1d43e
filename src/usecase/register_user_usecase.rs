use tracing::{debug, info, warn};

use crate::domain::{
    error::{DomainError, StorageError},
    models::{
        failure::{FailureReason, MISSING_TOKEN, classify},
        image::ProfileImage,
        registration::{RegisterResponse, RegistrationRequest, SignUpFields},
        route::Route,
        session::{Session, SessionToken, TOKEN_KEY, USER_KEY},
        user::UserRecord,
    },
    repositories::{auth_repository::AuthRepository, session_repository::SessionRepository},
    services::{navigator::Navigator, user_context::UserContext},
};

pub type RegistrationResult = Result<Session, FailureReason>;

pub struct RegisterUserUsecase<A: AuthRepository, S: SessionRepository, N: Navigator> {
    auth_repository: A,
    session_repository: S,
    navigator: N,
    user_context: UserContext,
}

impl<A: AuthRepository, S: SessionRepository, N: Navigator> RegisterUserUsecase<A, S, N> {
    pub fn new(
        auth_repository: A,
        session_repository: S,
        navigator: N,
        user_context: UserContext,
    ) -> Self {
        Self {
            auth_repository,
            session_repository,
            navigator,
            user_context,
        }
    }

    /// One registration attempt: validate, upload the image if any, register,
    /// then establish the session. Every call is a fresh attempt.
    pub async fn submit_registration(
        &self,
        fields: &SignUpFields,
        image: Option<&ProfileImage>,
    ) -> RegistrationResult
    where
        A: Send + Sync,
        S: Send + Sync,
        N: Send + Sync,
    {
        let validated = fields.validate().map_err(|e| {
            debug!(error = %e, "sign-up form rejected");
            FailureReason::from(e)
        })?;

        // registration must not start before the upload resolved
        let profile_image_url = match image {
            Some(image) => self.upload(image).await?,
            None => String::new(),
        };

        let request = validated.into_request(profile_image_url);
        let response = self.register(&request).await?;

        self.establish_session(response).await
    }

    async fn upload(&self, image: &ProfileImage) -> Result<String, FailureReason>
    where
        A: Send + Sync,
    {
        debug!(
            file_name = image.file_name(),
            size = image.bytes().len(),
            "uploading profile image"
        );

        let response = self.auth_repository.upload_image(image).await.map_err(|e| {
            let reason = classify(&e);
            warn!(status = ?e.status, %reason, "profile image upload failed");
            reason
        })?;

        Ok(response.image_url.unwrap_or_default())
    }

    async fn register(&self, request: &RegistrationRequest) -> Result<RegisterResponse, FailureReason>
    where
        A: Send + Sync,
    {
        debug!(email = request.email().as_str(), "submitting registration");

        self.auth_repository.register(request).await.map_err(|e| {
            let reason = classify(&e);
            warn!(status = ?e.status, %reason, "registration failed");
            reason
        })
    }

    async fn establish_session(&self, response: RegisterResponse) -> RegistrationResult
    where
        S: Send + Sync,
    {
        let RegisterResponse {
            token,
            user,
            message,
        } = response;

        let Some(token) = token.filter(|token| !token.is_empty()) else {
            let message = message
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| MISSING_TOKEN.to_string());
            warn!(%message, "registration returned no token");
            return Err(FailureReason::ServerMessage(message));
        };
        let token = SessionToken::new(token)?;

        self.persist(&token, user.as_ref()).await.map_err(|e| {
            warn!(error = %e, "failed to store session");
            FailureReason::from(e)
        })?;

        match &user {
            Some(user) => self.user_context.update(user.clone()),
            None => self.user_context.clear(),
        }
        self.navigator.go_to(&Route::dashboard());

        info!(
            user_id = user.as_ref().map(UserRecord::id).unwrap_or_default(),
            "account registered"
        );
        Ok(Session { token, user })
    }

    async fn persist(&self, token: &SessionToken, user: Option<&UserRecord>) -> Result<(), DomainError>
    where
        S: Send + Sync,
    {
        let user_json = user
            .map(serde_json::to_string)
            .transpose()
            .map_err(StorageError::from)?;

        let mut entries = vec![(TOKEN_KEY, token.as_str())];
        if let Some(user_json) = &user_json {
            entries.push((USER_KEY, user_json.as_str()));
        }
        self.session_repository.set_all(&entries).await?;
        Ok(())
    }
}
