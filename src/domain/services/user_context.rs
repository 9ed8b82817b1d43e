use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::models::user::UserRecord;

/// Shared handle to the signed-in user.
///
/// Created once at startup and cloned into every component that renders or
/// changes the identity. Cleared on logout.
#[derive(Debug, Clone, Default)]
pub struct UserContext {
    user: Arc<RwLock<Option<UserRecord>>>,
}

impl UserContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self) -> Option<UserRecord> {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn update(&self, user: UserRecord) {
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = Some(user);
    }

    pub fn clear(&self) {
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn is_signed_in(&self) -> bool {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
