//! Translation table value types.
//!
//! A translation table is a nested mapping whose leaves are either a single
//! string or an ordered list of strings. On disk this is plain JSON:
//!
//! ```json
//! { "pagination": { "total": "Total {total}", "pages": ["first", "last"] } }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Nested translation table: key -> entry.
pub type TranslationTable = HashMap<String, TranslationEntry>;

/// Placeholder values supplied to a single `translate` call.
pub type OptionBag = HashMap<String, String>;

/// A value stored in a translation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationEntry {
    /// A translatable string, possibly containing `{name}` placeholders
    Text(String),

    /// An ordered sequence of strings (e.g. month names)
    List(Vec<String>),

    /// A nested level of the table
    Nested(TranslationTable),
}

impl TranslationEntry {
    /// The string value, if this entry is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TranslationEntry::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The list value, if this entry is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            TranslationEntry::List(items) => Some(items),
            _ => None,
        }
    }

    /// The nested table, if this entry is a mapping.
    pub fn as_table(&self) -> Option<&TranslationTable> {
        match self {
            TranslationEntry::Nested(table) => Some(table),
            _ => None,
        }
    }

    /// Short name of the entry's shape, used in validation messages.
    pub fn kind(&self) -> &'static str {
        match self {
            TranslationEntry::Text(_) => "text",
            TranslationEntry::List(_) => "list",
            TranslationEntry::Nested(_) => "table",
        }
    }
}

impl From<&str> for TranslationEntry {
    fn from(text: &str) -> Self {
        TranslationEntry::Text(text.to_string())
    }
}

impl From<String> for TranslationEntry {
    fn from(text: String) -> Self {
        TranslationEntry::Text(text)
    }
}

impl From<Vec<String>> for TranslationEntry {
    fn from(items: Vec<String>) -> Self {
        TranslationEntry::List(items)
    }
}

impl From<TranslationTable> for TranslationEntry {
    fn from(table: TranslationTable) -> Self {
        TranslationEntry::Nested(table)
    }
}
