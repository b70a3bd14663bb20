//! Navigation menu derived from the current session.
//!
//! Signed-in entries follow the token rather than the resolved user, so the
//! menu does not flicker to "Login" while a refresh is in flight. The Admin
//! entry needs a resolved admin.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use session::{HOME_PATH, LOGIN_PATH, Session};

pub const DASHBOARD_PATH: &str = "/dashboard";
pub const ADMIN_PATH: &str = "/admin";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Admin,
    Dashboard,
    Login,
    Logout,
}

impl NavItem {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Admin => "Admin",
            Self::Dashboard => "Dashboard",
            Self::Login => "Login",
            Self::Logout => "Logout",
        }
    }

    /// Link target; `None` for actions rendered as buttons.
    #[must_use]
    pub fn href(self) -> Option<&'static str> {
        match self {
            Self::Home => Some(HOME_PATH),
            Self::Admin => Some(ADMIN_PATH),
            Self::Dashboard => Some(DASHBOARD_PATH),
            Self::Login => Some(LOGIN_PATH),
            Self::Logout => None,
        }
    }
}

/// Menu entries for `session`, in display order.
#[must_use]
pub fn nav_items(session: &Session) -> Vec<NavItem> {
    let mut items = vec![NavItem::Home];
    if !session.has_token() {
        items.push(NavItem::Login);
        return items;
    }
    if session.is_admin() {
        items.push(NavItem::Admin);
    }
    items.push(NavItem::Dashboard);
    items.push(NavItem::Logout);
    items
}

/// "Signed in as" label once an identity has resolved.
#[must_use]
pub fn account_label(session: &Session) -> Option<String> {
    session.user.as_ref().map(|u| u.display_name())
}
