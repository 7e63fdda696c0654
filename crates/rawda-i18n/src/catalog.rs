//! Translation table.
//!
//! The shell only needs a key to string lookup per language; [`Translate`]
//! is that seam. [`Catalog`] is the implementation shipped with the shell.
//! It starts from a built-in table covering every key in [`KEYS`] and can be
//! overlaid with entries loaded from JSON.

use crate::language::Language;
use std::collections::HashMap;
use thiserror::Error;

/// Key to string lookup for one language.
pub trait Translate {
    /// The string for `key` in `language`, if the table has one.
    fn lookup(&self, language: Language, key: &str) -> Option<&str>;
}

/// Built-in strings as `(key, english, arabic)`.
const BUILTIN: &[(&str, &str, &str)] = &[
    ("appTitle", "Rawda Kindergarten", "روضة الأطفال"),
    ("appSubtitle", "Management System", "نظام الإدارة"),
    ("loginTitle", "Sign in to your account", "تسجيل الدخول إلى حسابك"),
    ("username", "Username", "اسم المستخدم"),
    ("password", "Password", "كلمة المرور"),
    ("loginButton", "Sign In", "دخول"),
    (
        "loginError",
        "Invalid username or password",
        "اسم المستخدم أو كلمة المرور غير صحيحة",
    ),
    ("dashboard", "Dashboard", "لوحة التحكم"),
    ("students", "Students", "الطلاب"),
    ("attendance", "Attendance", "الحضور"),
    ("aiPlanner", "AI Planner", "المخطط الذكي"),
    ("classes", "Classes", "الفصول"),
    ("users", "Users", "المستخدمون"),
    ("myChild", "My Child", "طفلي"),
    ("roleAdmin", "Administrator", "مدير"),
    ("roleTeacher", "Teacher", "معلم"),
    ("roleParent", "Parent", "ولي أمر"),
    ("logout", "Log Out", "تسجيل الخروج"),
    ("installApp", "Install App", "تثبيت التطبيق"),
    ("profile", "Profile", "الملف الشخصي"),
];

/// Every key the shell looks up.
pub const KEYS: &[&str] = &[
    "appTitle",
    "appSubtitle",
    "loginTitle",
    "username",
    "password",
    "loginButton",
    "loginError",
    "dashboard",
    "students",
    "attendance",
    "aiPlanner",
    "classes",
    "users",
    "myChild",
    "roleAdmin",
    "roleTeacher",
    "roleParent",
    "logout",
    "installApp",
    "profile",
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported language in catalog: {0}")]
    UnsupportedLanguage(String),
}

/// In-memory translation table for both languages.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<Language, HashMap<String, String>>,
}

impl Catalog {
    /// An empty table; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The table shipped with the shell.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        for (key, en, ar) in BUILTIN {
            catalog.insert(Language::En, *key, *en);
            catalog.insert(Language::Ar, *key, *ar);
        }
        catalog
    }

    /// Parses `{"en": {"key": "text"}, "ar": {...}}`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: HashMap<String, HashMap<String, String>> = serde_json::from_str(json)?;
        let mut catalog = Self::empty();
        for (tag, strings) in raw {
            let language =
                Language::parse(&tag).ok_or_else(|| CatalogError::UnsupportedLanguage(tag))?;
            catalog
                .entries
                .entry(language)
                .or_default()
                .extend(strings);
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, language: Language, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .entry(language)
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Overlays `other` on top of this table; `other` wins on conflicts.
    pub fn merge(&mut self, other: Catalog) {
        for (language, strings) in other.entries {
            self.entries.entry(language).or_default().extend(strings);
        }
    }

    /// Keys from [`KEYS`] with no entry in `language`.
    pub fn missing_keys(&self, language: Language) -> Vec<&'static str> {
        KEYS.iter()
            .copied()
            .filter(|key| self.lookup(language, key).is_none())
            .collect()
    }
}

impl Translate for Catalog {
    fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.entries
            .get(&language)
            .and_then(|strings| strings.get(key))
            .map(String::as_str)
    }
}
