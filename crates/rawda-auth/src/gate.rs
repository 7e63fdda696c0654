use rawda_core::AuthError;
use rawda_models::{Directory, User};
use tracing::{debug, info, warn};
use validator::Validate;

use crate::credentials::LoginRequest;

/// Returns the first directory user whose username and password both equal
/// the submitted values.
///
/// Any other outcome is [`AuthError::InvalidCredentials`], whichever field
/// was wrong. Blank submissions are still compared against every record.
pub fn authenticate(directory: &Directory, request: &LoginRequest) -> Result<User, AuthError> {
    if let Err(e) = request.validate() {
        debug!(error = %e, "Blank login submission");
    }

    match directory
        .iter()
        .find(|user| user.matches_credentials(&request.username, &request.password))
    {
        Some(user) => {
            info!(user_id = %user.id, username = %user.username, role = %user.role, "Login succeeded");
            Ok(user.clone())
        }
        None => {
            warn!(username = %request.username, "Login failed");
            Err(AuthError::InvalidCredentials)
        }
    }
}
