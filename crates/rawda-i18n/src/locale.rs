//! The locale service.
//!
//! One [`LocaleService`] exists per shell. It holds the current language and
//! is the only place that language changes.

use crate::catalog::{Catalog, Translate};
use crate::language::{Direction, Language};
use std::fmt;

pub struct LocaleService {
    language: Language,
    table: Box<dyn Translate>,
}

impl LocaleService {
    /// A service using the built-in catalog.
    pub fn new(language: Language) -> Self {
        Self::with_table(language, Catalog::builtin())
    }

    /// A service backed by any translation table.
    pub fn with_table(language: Language, table: impl Translate + 'static) -> Self {
        Self {
            language,
            table: Box::new(table),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    /// Flips between English and Arabic and returns the new language.
    pub fn toggle_language(&mut self) -> Language {
        let previous = self.language;
        self.language = previous.toggled();
        tracing::info!(
            from = %previous,
            to = %self.language,
            direction = self.direction().html_dir(),
            "Language toggled"
        );
        self.language
    }

    /// Text for `key` in the current language.
    ///
    /// Falls back to English, then to the key itself. Never fails.
    pub fn translate(&self, key: &str) -> String {
        self.table
            .lookup(self.language, key)
            .or_else(|| self.table.lookup(Language::En, key))
            .map(str::to_string)
            .unwrap_or_else(|| {
                tracing::debug!(key, language = %self.language, "Missing translation");
                key.to_string()
            })
    }

    /// Label for the language switch: the other language's native name.
    pub fn language_switch_label(&self) -> &'static str {
        self.language.toggled().native_name()
    }
}

impl Default for LocaleService {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl fmt::Debug for LocaleService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleService")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}
