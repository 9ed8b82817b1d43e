use tracing::info;

use crate::domain::{
    error::DomainError,
    models::route::Route,
    repositories::session_repository::SessionRepository,
    services::{navigator::Navigator, user_context::UserContext},
};

pub struct LogoutUsecase<S: SessionRepository, N: Navigator> {
    session_repository: S,
    navigator: N,
    user_context: UserContext,
}

impl<S: SessionRepository, N: Navigator> LogoutUsecase<S, N> {
    pub fn new(session_repository: S, navigator: N, user_context: UserContext) -> Self {
        Self {
            session_repository,
            navigator,
            user_context,
        }
    }

    /// Wipe durable storage, forget the user, go back to the login screen
    pub async fn logout(&self) -> Result<(), DomainError>
    where
        S: Send + Sync,
    {
        self.session_repository.clear().await?;
        self.user_context.clear();
        self.navigator.go_to(&Route::login());

        info!("signed out");
        Ok(())
    }
}
