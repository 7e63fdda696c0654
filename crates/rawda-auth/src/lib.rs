//! # Rawda Auth
//!
//! Authentication for the Rawda shell.
//!
//! - [`credentials`]: The submitted login form
//! - [`gate`]: Matching submitted credentials against the user directory
//! - [`session`]: The record of who is signed in
//!
//! Authentication here is a plain equality match against a fixed directory.
//! There is no hashing, lockout or timing-safe comparison.
//!
//! # Example
//!
//! ```ignore
//! use rawda_auth::{LoginRequest, Session, authenticate};
//! use rawda_models::Directory;
//!
//! let directory = Directory::demo();
//! let user = authenticate(&directory, &LoginRequest::new("admin1", "pass123"))?;
//! let session = Session::start(user);
//! ```

pub mod credentials;
pub mod gate;
pub mod session;

pub use credentials::LoginRequest;
pub use gate::authenticate;
pub use rawda_core::AuthError;
pub use session::Session;
