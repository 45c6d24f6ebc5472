//! Language type: a named translation table.
//!
//! A `Language` pairs a locale identifier (e.g. "en", "zh-cn") with the nested
//! table of strings for that locale. Once installed in a registry it is shared
//! behind an `Arc` and never mutated; switching languages means installing a
//! new value.

use crate::i18n::{TranslationEntry, TranslationTable};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Built-in English table, embedded at compile time.
const BUILTIN_EN: &str = include_str!("../../locales/en.json");

static BUILTIN_DEFAULT: OnceLock<Language> = OnceLock::new();

/// A locale identifier and its translation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Locale identifier (e.g., "en", "fr", "zh-cn"); may be empty
    #[serde(default)]
    name: String,

    /// Root of the nested translation table
    #[serde(rename = "el", alias = "table", default)]
    table: TranslationTable,
}

impl Language {
    /// Create a language from a name and a table.
    pub fn new(name: impl Into<String>, table: TranslationTable) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }

    /// Parse a language from its JSON representation.
    ///
    /// # Arguments
    /// * `json` - A document of the form `{ "name": "fr", "el": { ... } }`
    ///
    /// # Returns
    /// * `Ok(Language)` if the document is a valid language
    /// * `Err` if it is not valid JSON or contains non-string leaves
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The built-in default language (English).
    ///
    /// Parsed once on first use and cloned on every call.
    pub fn builtin_default() -> Language {
        BUILTIN_DEFAULT
            .get_or_init(|| {
                Language::from_json(BUILTIN_EN).unwrap_or_else(|e| {
                    tracing::error!("Built-in English table is invalid: {}", e);
                    Language::new("en", TranslationTable::new())
                })
            })
            .clone()
    }

    /// Get the locale identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the root translation table.
    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// Count the terminal (text or list) entries in the table.
    pub fn entry_count(&self) -> usize {
        fn count(table: &TranslationTable) -> usize {
            table
                .values()
                .map(|entry| match entry {
                    TranslationEntry::Nested(inner) => count(inner),
                    _ => 1,
                })
                .sum()
        }
        count(&self.table)
    }

    /// Return a copy of this language under a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Language {
        Language::new(name, self.table.clone())
    }
}
