//! User roles.
//!
//! Roles form a closed set. What a role may see is decided by data (the
//! `roles` column of each [`MenuItem`](crate::menu::MenuItem)), so adding a
//! role means extending this enum and the menu table, not adding branches to
//! the navigation code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role slugs as they appear in directory records.
pub mod slugs {
    pub const ADMIN: &str = "admin";
    pub const TEACHER: &str = "teacher";
    pub const PARENT: &str = "parent";
}

/// The role a directory user signs in with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Kindergarten administration
    Admin,
    /// Classroom staff
    Teacher,
    /// Guardian of an enrolled child
    Parent,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Teacher, Role::Parent];

    /// The slug used in directory records and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => slugs::ADMIN,
            Self::Teacher => slugs::TEACHER,
            Self::Parent => slugs::PARENT,
        }
    }

    /// Translation key for the role's display label.
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Admin => "roleAdmin",
            Self::Teacher => "roleTeacher",
            Self::Parent => "roleParent",
        }
    }
}

/// Translation key for the label shown under the user's name.
///
/// Anything that is not an admin or a teacher, including a missing role,
/// gets the parent label.
pub fn role_label_key(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Admin) => Role::Admin.label_key(),
        Some(Role::Teacher) => Role::Teacher.label_key(),
        _ => Role::Parent.label_key(),
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the role slugs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            slugs::ADMIN => Ok(Self::Admin),
            slugs::TEACHER => Ok(Self::Teacher),
            slugs::PARENT => Ok(Self::Parent),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}
