//! Rawda Observability
//!
//! Console logging and shell counters.
//!
//! - [`logging`]: `tracing-subscriber` console setup driven by `RUST_LOG` / `LOG_LEVEL`
//! - [`metrics`]: counters for logins, view changes and language toggles
//!
//! No exporter is installed; counters are recorded only if the host process
//! installs a `metrics` recorder. With the `observability` feature disabled
//! the tracking functions compile to no-ops.
//!
//! # Examples
//!
//! ```no_run
//! use rawda_observability::{init_basic_console_logging, track_login_success};
//!
//! init_basic_console_logging();
//! track_login_success("admin");
//! ```

pub mod logging;

#[cfg(feature = "observability")]
pub mod metrics;

pub use logging::{build_env_filter, init_basic_console_logging};

#[cfg(feature = "observability")]
pub use self::metrics::{
    track_language_toggled, track_login_failure, track_login_success, track_logout,
    track_view_selected,
};

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    pub fn track_login_success(_role: &str) {}
    pub fn track_login_failure(_reason: &str) {}
    pub fn track_logout(_role: &str) {}
    pub fn track_view_selected(_view: &str) {}
    pub fn track_language_toggled(_language: &str) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
