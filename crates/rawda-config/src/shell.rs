//! Shell configuration.
//!
//! # Environment Variables
//!
//! - `RAWDA_DEFAULT_LANGUAGE`: `en` or `ar` (default: `en`)
//! - `RAWDA_SHOW_INSTALL`: offer the install entry, `true`/`false`/`1`/`0` (default: `false`)
//! - `RAWDA_DIRECTORY_PATH`: JSON array of user records; the demo directory is used when unset
//! - `RAWDA_CATALOG_PATH`: JSON translation overrides merged over the built-in catalog
//!
//! Values that cannot be parsed fall back to their defaults.

use rawda_i18n::{Catalog, CatalogError, Language};
use rawda_models::Directory;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid user directory in {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid translation catalog in {path}: {source}")]
    Catalog {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    pub default_language: Language,
    pub show_install_button: bool,
    pub directory_path: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            default_language: Language::En,
            show_install_button: false,
            directory_path: None,
            catalog_path: None,
        }
    }
}

impl ShellConfig {
    /// Creates a new `ShellConfig` from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; `from_env` uses the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            default_language: lookup("RAWDA_DEFAULT_LANGUAGE")
                .and_then(|v| Language::parse(&v))
                .unwrap_or(defaults.default_language),
            show_install_button: lookup("RAWDA_SHOW_INSTALL")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.show_install_button),
            directory_path: lookup("RAWDA_DIRECTORY_PATH")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            catalog_path: lookup("RAWDA_CATALOG_PATH")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// The configured user directory, or the demo directory when none is set.
    pub fn load_directory(&self) -> Result<Directory, ConfigError> {
        let Some(path) = &self.directory_path else {
            tracing::info!("No directory configured; using demo directory");
            return Ok(Directory::demo());
        };
        let json = read(path)?;
        let directory = Directory::from_json(&json).map_err(|source| ConfigError::Directory {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), users = directory.len(), "Loaded user directory");
        Ok(directory)
    }

    /// The built-in catalog, overlaid with the configured overrides if any.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        let mut catalog = Catalog::builtin();
        if let Some(path) = &self.catalog_path {
            let json = read(path)?;
            let overlay = Catalog::from_json(&json).map_err(|source| ConfigError::Catalog {
                path: path.clone(),
                source,
            })?;
            catalog.merge(overlay);
            tracing::info!(path = %path.display(), "Loaded translation overrides");
        }
        for language in [Language::En, Language::Ar] {
            let missing = catalog.missing_keys(language);
            if !missing.is_empty() {
                tracing::warn!(%language, ?missing, "Translation catalog is missing keys");
            }
        }
        Ok(catalog)
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
