//! # Rawda Models
//!
//! Domain models for the Rawda shell.
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed identifiers
//! - [`roles`]: The closed set of user roles and their label keys
//! - [`users`]: User records and the in-memory user directory
//! - [`menu`]: View identifiers, icons and the role-tagged master menu
//!
//! # Example
//!
//! ```ignore
//! use rawda_models::{Directory, Role, menu};
//!
//! let directory = Directory::demo();
//! let items = menu::permitted_menu(Role::Teacher);
//! assert_eq!(items[0].id, menu::View::Dashboard);
//! ```

pub mod ids;
pub mod menu;
pub mod roles;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use ids::UserId;
pub use menu::{
    Icon, MASTER_MENU, MenuItem, UnknownView, View, default_view_for, filter_menu, permitted_menu,
};
pub use roles::{Role, UnknownRole, role_label_key};
pub use users::{Directory, FALLBACK_AVATAR, User};
