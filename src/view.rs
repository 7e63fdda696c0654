//! Render snapshots.
//!
//! [`Screen`] is everything the view layer needs to draw one frame. It is
//! rebuilt from the shell on every render, so labels always come out in the
//! current language and the layout always follows the current direction.

use rawda_i18n::{Direction, Edge, Language};
use rawda_models::{Icon, View};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Login(LoginScreen),
    Dashboard(DashboardScreen),
}

impl Screen {
    pub fn direction(&self) -> Direction {
        match self {
            Self::Login(login) => login.direction,
            Self::Dashboard(dashboard) => dashboard.direction,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginScreen {
    pub language: Language,
    pub direction: Direction,
    pub app_title: String,
    pub login_title: String,
    pub username_label: String,
    pub password_label: String,
    pub submit_label: String,
    /// Localized failure message from the last submission, if it failed.
    pub error: Option<String>,
    pub language_switch: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardScreen {
    pub language: Language,
    pub direction: Direction,
    pub active_view: View,
    pub sidebar: Sidebar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sidebar {
    /// Edge the sidebar is pinned to.
    pub anchor: Edge,
    pub mobile_open: bool,
    pub app_title: String,
    pub app_subtitle: String,
    pub entries: Vec<MenuEntry>,
    /// Label of the install entry, present only while installing is offered.
    pub install: Option<String>,
    pub language_switch: String,
    pub profile: ProfileCard,
    pub logout_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuEntry {
    pub id: View,
    pub label: String,
    pub icon: Icon,
    pub active: bool,
}

/// Sidebar footer describing the signed-in user. Never carries the password.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileCard {
    pub name: String,
    pub avatar: String,
    pub role_label: String,
    pub active: bool,
}
