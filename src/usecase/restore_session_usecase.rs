use tracing::{debug, warn};

use crate::domain::{
    error::{DomainError, StorageError},
    models::{
        session::{SessionToken, TOKEN_KEY, USER_KEY},
        user::UserRecord,
    },
    repositories::session_repository::SessionRepository,
    services::user_context::UserContext,
};

/// Rebuilds the in-memory identity from durable storage at startup
pub struct RestoreSessionUsecase<S: SessionRepository> {
    session_repository: S,
    user_context: UserContext,
}

impl<S: SessionRepository> RestoreSessionUsecase<S> {
    pub fn new(session_repository: S, user_context: UserContext) -> Self {
        Self {
            session_repository,
            user_context,
        }
    }

    /// Returns the stored token, if any. The stored user is loaded into the
    /// context only when a token is present. Unreadable storage counts as no
    /// session; only I/O failures are returned.
    pub async fn restore(&self) -> Result<Option<SessionToken>, DomainError>
    where
        S: Send + Sync,
    {
        let stored = match self.session_repository.get(TOKEN_KEY).await {
            Ok(stored) => stored,
            Err(StorageError::Serialization(e)) => {
                warn!(error = %e, "ignoring unreadable session storage");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let Some(token) = stored else {
            debug!("no stored session");
            return Ok(None);
        };
        let Ok(token) = SessionToken::new(token) else {
            warn!("ignoring empty stored token");
            return Ok(None);
        };

        match self.session_repository.get(USER_KEY).await? {
            Some(json) => match serde_json::from_str::<UserRecord>(&json) {
                Ok(user) => self.user_context.update(user),
                Err(e) => warn!(error = %e, "ignoring unreadable stored user"),
            },
            None => self.user_context.clear(),
        }

        Ok(Some(token))
    }
}
