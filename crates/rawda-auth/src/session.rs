use chrono::{DateTime, Utc};
use rawda_models::{Role, User};

/// The signed-in user and when they signed in.
///
/// At most one exists per shell. It is created from a successful
/// authentication and dropped on logout.
#[derive(Debug, Clone)]
pub struct Session {
    user: User,
    started_at: DateTime<Utc>,
}

impl Session {
    pub fn start(user: User) -> Self {
        Self {
            user,
            started_at: Utc::now(),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}
