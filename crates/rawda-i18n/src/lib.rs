//! # Rawda i18n
//!
//! Bilingual (English / Arabic) presentation state for the Rawda shell.
//!
//! - [`language`]: The two supported languages and the text direction each implies
//! - [`catalog`]: The translation table and the [`Translate`] lookup trait
//! - [`locale`]: [`LocaleService`], the owner of the current language
//!
//! # Example
//!
//! ```ignore
//! use rawda_i18n::{Direction, Language, LocaleService};
//!
//! let mut locale = LocaleService::new(Language::En);
//! assert_eq!(locale.translate("logout"), "Log Out");
//!
//! locale.toggle_language();
//! assert_eq!(locale.direction(), Direction::Rtl);
//! ```

pub mod catalog;
pub mod language;
pub mod locale;

// Re-export commonly used types at crate root
pub use catalog::{Catalog, CatalogError, KEYS, Translate};
pub use language::{Direction, Edge, Language};
pub use locale::LocaleService;
