//! # Rawda Config
//!
//! Shell configuration loaded from environment variables.
//!
//! - [`shell`]: [`ShellConfig`] and the loaders for the user directory and
//!   translation catalog it points at
//!
//! # Example
//!
//! ```ignore
//! use rawda_config::ShellConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = ShellConfig::from_env();
//! let directory = config.load_directory()?;
//! let catalog = config.load_catalog()?;
//! ```

pub mod shell;

pub use shell::{ConfigError, ShellConfig};
