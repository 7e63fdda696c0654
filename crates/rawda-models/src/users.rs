//! User records and the user directory.
//!
//! The directory is a fixed, in-memory list of users supplied at startup. It
//! is never mutated after construction. Lookups walk it in insertion order so
//! the first record wins should a username ever appear twice.

use crate::ids::UserId;
use crate::roles::Role;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use validator::Validate;

/// Placeholder avatar used when a record carries none.
pub const FALLBACK_AVATAR: &str = "https://picsum.photos/seed/user/40/40";

/// A directory user.
///
/// `password` is a plaintext equality token. It is never serialized and is
/// redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct User {
    #[serde(default)]
    pub id: UserId,
    #[validate(length(min = 1))]
    pub username: String,
    #[serde(skip_serializing)]
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub role: Role,
    /// Opaque reference to the user's picture (usually a URL).
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    /// Avatar reference to render, falling back to [`FALLBACK_AVATAR`].
    pub fn avatar_or_fallback(&self) -> &str {
        self.avatar.as_deref().unwrap_or(FALLBACK_AVATAR)
    }

    /// Exact, case-sensitive match on both credential fields.
    pub fn matches_credentials(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("role", &self.role)
            .field("avatar", &self.avatar)
            .finish()
    }
}

/// The fixed collection of known users.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    users: Vec<User>,
}

impl Directory {
    /// Build a directory from records in lookup order.
    ///
    /// Every record is kept. Records with a blank username, password or name
    /// are logged since they are probably misconfigured.
    pub fn new(users: Vec<User>) -> Self {
        for user in &users {
            if let Err(e) = user.validate() {
                tracing::warn!(user_id = %user.id, error = %e, "Directory record has blank fields");
            }
        }
        let directory = Self { users };
        for username in directory.duplicate_usernames() {
            tracing::warn!(username = %username, "Duplicate username in directory; first record wins");
        }
        directory
    }

    /// Parse a JSON array of user records.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let users: Vec<User> = serde_json::from_str(json)?;
        Ok(Self::new(users))
    }

    /// The built-in demonstration directory, one user per role.
    pub fn demo() -> Self {
        Self::new(vec![
            User {
                id: UserId::from_u128(1),
                username: "admin1".to_string(),
                password: "pass123".to_string(),
                name: "Huda Al-Rashid".to_string(),
                role: Role::Admin,
                avatar: Some("https://picsum.photos/seed/admin1/40/40".to_string()),
            },
            User {
                id: UserId::from_u128(2),
                username: "teacher1".to_string(),
                password: "pass123".to_string(),
                name: "Mariam Saleh".to_string(),
                role: Role::Teacher,
                avatar: Some("https://picsum.photos/seed/teacher1/40/40".to_string()),
            },
            User {
                id: UserId::from_u128(3),
                username: "parent1".to_string(),
                password: "pass123".to_string(),
                name: "Omar Haddad".to_string(),
                role: Role::Parent,
                avatar: None,
            },
        ])
    }

    /// Records in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// First record with the given username.
    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    /// Usernames that appear more than once, each reported once.
    pub fn duplicate_usernames(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for user in &self.users {
            let name = user.username.as_str();
            if !seen.insert(name) && reported.insert(name) {
                duplicates.push(name);
            }
        }
        duplicates
    }
}
