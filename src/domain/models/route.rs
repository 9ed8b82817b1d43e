use std::fmt;

/// Path of a screen in the application
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route(String);

impl Route {
    pub const DASHBOARD: &'static str = "/dashboard";
    pub const LOGIN: &'static str = "/login";
    pub const SIGNUP: &'static str = "/signup";
    pub const INCOME: &'static str = "/income";
    pub const EXPENSE: &'static str = "/expense";

    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn dashboard() -> Self {
        Self::new(Self::DASHBOARD)
    }

    pub fn login() -> Self {
        Self::new(Self::LOGIN)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Menu path that triggers logout instead of navigation
pub const LOGOUT_PATH: &str = "logout";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
}

pub const SIDE_MENU_DATA: [MenuItem; 4] = [
    MenuItem {
        label: "Dashboard",
        path: Route::DASHBOARD,
    },
    MenuItem {
        label: "Income",
        path: Route::INCOME,
    },
    MenuItem {
        label: "Expense",
        path: Route::EXPENSE,
    },
    MenuItem {
        label: "Logout",
        path: LOGOUT_PATH,
    },
];
