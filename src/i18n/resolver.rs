//! Dotted-path lookup in a nested translation table.

use crate::i18n::{TranslationEntry, TranslationTable};

/// Walk a dotted path through a translation table.
///
/// Descends one level per segment and stops at the first missing segment or
/// at the first intermediate value that is not a nested table. Empty paths and
/// paths with empty segments (leading, trailing or consecutive dots) are an
/// immediate miss.
///
/// # Arguments
/// * `path` - Dot-delimited key (e.g., "pagination.total")
/// * `table` - Table to search
///
/// # Returns
/// * `Some(&TranslationEntry)` for the terminal value, uninterpolated
/// * `None` on a miss
pub fn resolve<'a>(path: &str, table: &'a TranslationTable) -> Option<&'a TranslationEntry> {
    if !is_well_formed(path) {
        tracing::debug!("Rejecting malformed translation path: '{}'", path);
        return None;
    }

    let mut segments = path.split('.');
    let last = segments.next_back()?;

    let mut current = table;
    for segment in segments {
        current = current.get(segment)?.as_table()?;
    }
    current.get(last)
}

/// Resolve `path` to a text value, ignoring lists and nested tables.
pub fn resolve_text<'a>(path: &str, table: &'a TranslationTable) -> Option<&'a str> {
    resolve(path, table).and_then(TranslationEntry::as_text)
}

/// A path is well formed when it is non-empty and has no empty segments.
fn is_well_formed(path: &str) -> bool {
    !path.is_empty() && path.split('.').all(|segment| !segment.is_empty())
}
