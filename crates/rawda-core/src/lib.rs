//! # Rawda Core
//!
//! Core types shared by every Rawda crate.
//!
//! - [`errors`]: Error types for authentication and navigation
//! - [`views`]: Stable string identifiers for navigable views
//!
//! # Example
//!
//! ```ignore
//! use rawda_core::errors::AuthError;
//! use rawda_core::views;
//!
//! let err = AuthError::InvalidCredentials;
//! assert_eq!(views::DASHBOARD, "dashboard");
//! ```

pub mod errors;
pub mod views;

// Re-export commonly used types at crate root
pub use errors::{AuthError, NavigationError};
