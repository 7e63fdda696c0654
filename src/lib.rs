//! # Rawda
//!
//! A role-aware front-end shell for a kindergarten management application.
//!
//! ## Overview
//!
//! The shell signs a user in against a fixed user directory, shows a
//! navigation menu filtered by the user's role and presents everything in
//! English (left to right) or Arabic (right to left).
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── rawda-core/           # Error types and view identifiers
//! ├── rawda-models/         # Users, roles, directory, master menu
//! ├── rawda-i18n/           # Language, direction, translation catalog
//! ├── rawda-auth/           # Authentication gate and session
//! ├── rawda-config/         # Environment-driven configuration
//! └── rawda-observability/  # Console logging and counters
//! src/
//! ├── navigation.rs         # Navigation controller state machine
//! ├── shell.rs              # Shell controller owning all interactive state
//! ├── view.rs               # Render snapshots handed to the view layer
//! └── main.rs               # Interactive terminal front-end
//! ```
//!
//! ## Roles
//!
//! | Role | Menu |
//! |------|------|
//! | Admin | Dashboard, Students, Attendance, AI Planner, Classes, Users |
//! | Teacher | Dashboard, Students, Attendance, AI Planner |
//! | Parent | My Child |
//!
//! Every signed-in role can also open its own profile from the sidebar footer.
//!
//! ## Example
//!
//! ```ignore
//! use rawda::{Screen, Shell};
//! use rawda_i18n::{Language, LocaleService};
//! use rawda_models::Directory;
//!
//! let mut shell = Shell::new(Directory::demo(), LocaleService::new(Language::En));
//! shell.submit_login("admin1", "pass123")?;
//! if let Screen::Dashboard(dashboard) = shell.render() {
//!     println!("{}", dashboard.sidebar.entries[0].label);
//! }
//! ```

pub mod navigation;
pub mod shell;
pub mod view;

pub use navigation::{NavState, Navigation};
pub use shell::{InstallPrompt, Shell};
pub use view::{DashboardScreen, LoginScreen, MenuEntry, ProfileCard, Screen, Sidebar};
