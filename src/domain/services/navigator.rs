use crate::domain::models::route::Route;

/// Moves the application to another screen
pub trait Navigator {
    fn go_to(&self, route: &Route);
}
