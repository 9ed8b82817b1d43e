use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::domain::{models::route::Route, services::navigator::Navigator};

/// Navigator for a headless client: remembers where the app currently is
#[derive(Debug, Clone, Default)]
pub struct RouteRecorder {
    current: Arc<RwLock<Option<Route>>>,
}

impl RouteRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(route: Route) -> Self {
        Self {
            current: Arc::new(RwLock::new(Some(route))),
        }
    }

    pub fn current(&self) -> Option<Route> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for RouteRecorder {
    fn go_to(&self, route: &Route) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        info!(
            from = current.as_ref().map(Route::as_str).unwrap_or("-"),
            to = route.as_str(),
            "navigate"
        );
        *current = Some(route.clone());
    }
}
