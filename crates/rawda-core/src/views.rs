//! View identifier constants for the Rawda shell.
//!
//! These are the string forms the view layer uses to name screens. Using
//! these constants instead of string literals keeps the menu table, the
//! parser and the renderers in agreement.
//!
//! # Example
//!
//! ```ignore
//! use rawda_core::views;
//!
//! if requested == views::PARENT_VIEW {
//!     // Render the parent landing page
//! }
//! ```

// =============================================================================
// Staff views
// =============================================================================

/// Overview page for admins and teachers
pub const DASHBOARD: &str = "dashboard";
/// Student roster
pub const STUDENTS: &str = "students";
/// Daily attendance sheet
pub const ATTENDANCE: &str = "attendance";
/// Lesson planning assistant
pub const AI_PLANNER: &str = "ai-planner";

// =============================================================================
// Admin views
// =============================================================================

/// Class management
pub const CLASSES: &str = "classes";
/// User management
pub const USERS: &str = "users";

// =============================================================================
// Parent views
// =============================================================================

/// Landing page for parents
pub const PARENT_VIEW: &str = "parent-view";

// =============================================================================
// Shared views
// =============================================================================

/// Signed-in user's own profile, reachable from the sidebar footer
pub const PROFILE: &str = "profile";

/// Every view identifier, in master menu order with `profile` last.
pub const ALL: &[&str] = &[
    DASHBOARD,
    STUDENTS,
    ATTENDANCE,
    AI_PLANNER,
    CLASSES,
    USERS,
    PARENT_VIEW,
    PROFILE,
];
