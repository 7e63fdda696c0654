//! Views, icons and the master menu.
//!
//! The master menu is a static, role-tagged table. Per-session menus are
//! produced by filtering it on the signed-in role; the filter keeps master
//! order and is cheap enough to run on every render.

use crate::roles::Role;
use rawda_core::views;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A screen the shell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Dashboard,
    Students,
    Attendance,
    AiPlanner,
    Classes,
    Users,
    ParentView,
    /// The signed-in user's own profile. Not part of the master menu.
    Profile,
}

impl View {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => views::DASHBOARD,
            Self::Students => views::STUDENTS,
            Self::Attendance => views::ATTENDANCE,
            Self::AiPlanner => views::AI_PLANNER,
            Self::Classes => views::CLASSES,
            Self::Users => views::USERS,
            Self::ParentView => views::PARENT_VIEW,
            Self::Profile => views::PROFILE,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string that names no [`View`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownView(pub String);

impl fmt::Display for UnknownView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown view: {}", self.0)
    }
}

impl std::error::Error for UnknownView {}

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            views::DASHBOARD => Ok(Self::Dashboard),
            views::STUDENTS => Ok(Self::Students),
            views::ATTENDANCE => Ok(Self::Attendance),
            views::AI_PLANNER => Ok(Self::AiPlanner),
            views::CLASSES => Ok(Self::Classes),
            views::USERS => Ok(Self::Users),
            views::PARENT_VIEW => Ok(Self::ParentView),
            views::PROFILE => Ok(Self::Profile),
            other => Err(UnknownView(other.to_string())),
        }
    }
}

/// Opaque icon reference; the renderer decides what to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Icon {
    LayoutDashboard,
    Users,
    CalendarCheck,
    Sparkles,
    School,
    UserCog,
    Home,
}

impl Icon {
    pub const fn name(self) -> &'static str {
        match self {
            Self::LayoutDashboard => "layout-dashboard",
            Self::Users => "users",
            Self::CalendarCheck => "calendar-check",
            Self::Sparkles => "sparkles",
            Self::School => "school",
            Self::UserCog => "user-cog",
            Self::Home => "home",
        }
    }
}

/// One entry of the master menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: View,
    /// Translation key for the entry's label.
    pub label_key: &'static str,
    pub icon: Icon,
    pub roles: &'static [Role],
}

impl MenuItem {
    pub fn is_allowed(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

const STAFF: &[Role] = &[Role::Admin, Role::Teacher];
const ADMIN_ONLY: &[Role] = &[Role::Admin];
const PARENT_ONLY: &[Role] = &[Role::Parent];

/// Every navigable view with the roles allowed to open it.
pub const MASTER_MENU: &[MenuItem] = &[
    MenuItem {
        id: View::Dashboard,
        label_key: "dashboard",
        icon: Icon::LayoutDashboard,
        roles: STAFF,
    },
    MenuItem {
        id: View::Students,
        label_key: "students",
        icon: Icon::Users,
        roles: STAFF,
    },
    MenuItem {
        id: View::Attendance,
        label_key: "attendance",
        icon: Icon::CalendarCheck,
        roles: STAFF,
    },
    MenuItem {
        id: View::AiPlanner,
        label_key: "aiPlanner",
        icon: Icon::Sparkles,
        roles: STAFF,
    },
    MenuItem {
        id: View::Classes,
        label_key: "classes",
        icon: Icon::School,
        roles: ADMIN_ONLY,
    },
    MenuItem {
        id: View::Users,
        label_key: "users",
        icon: Icon::UserCog,
        roles: ADMIN_ONLY,
    },
    MenuItem {
        id: View::ParentView,
        label_key: "myChild",
        icon: Icon::Home,
        roles: PARENT_ONLY,
    },
];

/// Items of `master` the role may open, in `master` order.
pub fn filter_menu(master: &[MenuItem], role: Role) -> Vec<&MenuItem> {
    master.iter().filter(|item| item.is_allowed(role)).collect()
}

/// [`MASTER_MENU`] filtered for `role`.
pub fn permitted_menu(role: Role) -> Vec<&'static MenuItem> {
    filter_menu(MASTER_MENU, role)
}

/// The view a fresh session opens on: the first permitted item of `master`.
pub fn default_view_for(master: &[MenuItem], role: Role) -> Option<View> {
    master.iter().find(|item| item.is_allowed(role)).map(|item| item.id)
}
