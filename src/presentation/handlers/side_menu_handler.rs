use crate::{
    domain::{
        error::DomainError,
        models::route::{LOGOUT_PATH, MenuItem, Route, SIDE_MENU_DATA},
        repositories::session_repository::SessionRepository,
        services::{navigator::Navigator, user_context::UserContext},
    },
    presentation::components::char_avatar::CharAvatar,
    usecase::logout_usecase::LogoutUsecase,
};

/// Top of the menu: the profile image when the user has one, initials otherwise
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileBadge {
    Image(String),
    Initials(CharAvatar),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub item: MenuItem,
    pub active: bool,
}

pub struct SideMenu<S: SessionRepository, N: Navigator + Clone> {
    user_context: UserContext,
    navigator: N,
    logout_usecase: LogoutUsecase<S, N>,
}

impl<S: SessionRepository, N: Navigator + Clone> SideMenu<S, N> {
    pub fn new(session_repository: S, navigator: N, user_context: UserContext) -> Self {
        Self {
            logout_usecase: LogoutUsecase::new(
                session_repository,
                navigator.clone(),
                user_context.clone(),
            ),
            user_context,
            navigator,
        }
    }

    pub fn profile_badge(&self) -> ProfileBadge {
        let user = self.user_context.read();
        match user.as_ref().and_then(|u| u.profile_image_url()) {
            Some(url) => ProfileBadge::Image(url.to_string()),
            None => ProfileBadge::Initials(
                CharAvatar::new(user.as_ref().map(|u| u.full_name()).unwrap_or_default())
                    .size("w-20", "h-20")
                    .style("text-xl"),
            ),
        }
    }

    pub fn display_name(&self) -> String {
        self.user_context
            .read()
            .map(|u| u.full_name().to_string())
            .unwrap_or_default()
    }

    pub fn entries(&self, active_menu: &str) -> Vec<MenuEntry> {
        SIDE_MENU_DATA
            .iter()
            .map(|item| MenuEntry {
                item: *item,
                active: item.label == active_menu,
            })
            .collect()
    }

    /// Menu button click: logout for the logout entry, navigation otherwise
    pub async fn handle_click(&self, path: &str) -> Result<(), DomainError>
    where
        S: Send + Sync,
    {
        if path == LOGOUT_PATH {
            return self.logout_usecase.logout().await;
        }
        self.navigator.go_to(&Route::new(path));
        Ok(())
    }

    pub fn render(&self, active_menu: &str) -> String {
        let badge = match self.profile_badge() {
            ProfileBadge::Image(url) => format!("[{}]", url),
            ProfileBadge::Initials(avatar) => avatar.render(),
        };
        let mut lines = vec![badge, self.display_name(), String::new()];
        lines.extend(self.entries(active_menu).into_iter().map(|entry| {
            let marker = if entry.active { ">" } else { " " };
            format!("{} {:<10} {}", marker, entry.item.label, entry.item.path)
        }));
        lines.join("\n")
    }
}
