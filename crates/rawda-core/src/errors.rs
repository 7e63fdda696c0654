//! Error types for the Rawda shell.
//!
//! Only [`AuthError::InvalidCredentials`] is ever shown to a user. The
//! [`NavigationError`] variants mark calls the view layer should never make;
//! they are returned instead of panicking and the navigation state is left
//! untouched whenever one is produced.

use thiserror::Error;

/// Failure to establish a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No directory record matched the submitted username and password.
    ///
    /// The message deliberately does not say which of the two was wrong.
    #[error("invalid username or password")]
    InvalidCredentials,
}

impl AuthError {
    /// Translation key for the localized, user-facing message.
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "loginError",
        }
    }

    /// Short reason tag used in logs and counters.
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid_credentials",
        }
    }
}

/// A navigation transition the current state does not allow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The transition requires a signed-in user.
    #[error("no user is signed in")]
    NotAuthenticated,

    /// The requested view is not in the menu for the signed-in role.
    #[error("view '{view}' is not available to role '{role}'")]
    ViewNotPermitted { view: String, role: String },
}
