//! Language table validation.
//!
//! Compares a candidate language against a reference language (usually the
//! built-in English table) and reports keys that are missing, keys whose
//! shape differs, and strings whose placeholders do not match.

use crate::i18n::template::placeholders;
use crate::i18n::{Language, TranslationEntry, TranslationTable};
use std::collections::BTreeSet;

/// Differences found between a reference table and a candidate table.
///
/// Each message names the dotted key path it concerns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Keys the candidate lacks or stores with another shape; lookups for
    /// these return nothing or a different kind of value
    pub errors: Vec<String>,

    /// Keys that resolve but differ in placeholders, list length or presence
    /// in the reference
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Whether some reference key cannot be looked up the same way.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Whether both tables expose the same keys, shapes and placeholders.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Validator for language tables.
pub struct LanguageValidator;

impl LanguageValidator {
    /// Validate `candidate` against `reference`.
    ///
    /// This function checks that:
    /// - Every key of the reference exists in the candidate
    /// - Each key has the same shape (text, list or table) in both
    /// - Text values use the same set of placeholders
    /// - The candidate has no keys the reference lacks
    ///
    /// Messages are sorted by key path.
    pub fn validate(reference: &Language, candidate: &Language) -> ValidationReport {
        let mut report = ValidationReport::default();
        Self::compare(reference.table(), candidate.table(), "", &mut report);
        report.errors.sort();
        report.warnings.sort();
        report
    }

    fn compare(
        reference: &TranslationTable,
        candidate: &TranslationTable,
        prefix: &str,
        report: &mut ValidationReport,
    ) {
        for (key, expected) in reference {
            let path = join(prefix, key);
            let Some(actual) = candidate.get(key) else {
                report.errors.push(format!("Missing key: {}", path));
                continue;
            };

            match (expected, actual) {
                (TranslationEntry::Nested(inner_ref), TranslationEntry::Nested(inner_cand)) => {
                    Self::compare(inner_ref, inner_cand, &path, report);
                }
                (TranslationEntry::Text(ref_text), TranslationEntry::Text(cand_text)) => {
                    let ref_names = Self::placeholder_set(ref_text);
                    let cand_names = Self::placeholder_set(cand_text);
                    if ref_names != cand_names {
                        report.warnings.push(format!(
                            "Placeholder mismatch at {}: reference has {:?}, candidate has {:?}",
                            path, ref_names, cand_names
                        ));
                    }
                }
                (TranslationEntry::List(ref_items), TranslationEntry::List(cand_items)) => {
                    if ref_items.len() != cand_items.len() {
                        report.warnings.push(format!(
                            "List length mismatch at {}: reference has {}, candidate has {}",
                            path,
                            ref_items.len(),
                            cand_items.len()
                        ));
                    }
                }
                _ => {
                    report.errors.push(format!(
                        "Shape mismatch at {}: reference is {}, candidate is {}",
                        path,
                        expected.kind(),
                        actual.kind()
                    ));
                }
            }
        }

        for key in candidate.keys().filter(|key| !reference.contains_key(*key)) {
            report
                .warnings
                .push(format!("Extra key: {}", join(prefix, key)));
        }
    }

    fn placeholder_set(text: &str) -> BTreeSet<String> {
        placeholders(text).into_iter().collect()
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn language(json: &str) -> Language {
        Language::new("test", serde_json::from_str(json).expect("valid table"))
    }

    #[test]
    fn test_identical_languages_are_clean() {
        let reference = Language::builtin_default();
        let report = LanguageValidator::validate(&reference, &reference);
        assert!(report.is_clean());
    }

    #[test]
    fn test_missing_key_is_error() {
        let reference = language(r#"{ "a": { "b": "x", "c": "y" } }"#);
        let candidate = language(r#"{ "a": { "b": "x" } }"#);

        let report = LanguageValidator::validate(&reference, &candidate);
        assert_eq!(report.errors, vec!["Missing key: a.c"]);
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_shape_mismatch_is_error() {
        let reference = language(r#"{ "a": { "b": "x" } }"#);
        let candidate = language(r#"{ "a": "flat" }"#);

        let report = LanguageValidator::validate(&reference, &candidate);
        assert_eq!(
            report.errors,
            vec!["Shape mismatch at a: reference is table, candidate is text"]
        );
    }

    #[test]
    fn test_placeholder_mismatch_is_warning() {
        let reference = language(r#"{ "total": "Total {total}" }"#);
        let candidate = language(r#"{ "total": "Gesamt {count}" }"#);

        let report = LanguageValidator::validate(&reference, &candidate);
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].starts_with("Placeholder mismatch at total"));
    }

    #[test]
    fn test_placeholder_order_is_ignored() {
        let reference = language(r#"{ "f": "{checked}/{total}" }"#);
        let candidate = language(r#"{ "f": "{total}: {checked}" }"#);
        assert!(LanguageValidator::validate(&reference, &candidate).is_clean());
    }

    #[test]
    fn test_list_length_and_extra_keys_are_warnings() {
        let reference = language(r#"{ "titles": ["a", "b"] }"#);
        let candidate = language(r#"{ "titles": ["a"], "bonus": "x" }"#);

        let report = LanguageValidator::validate(&reference, &candidate);
        assert!(!report.has_errors());
        assert_eq!(
            report.warnings,
            vec![
                "Extra key: bonus".to_string(),
                "List length mismatch at titles: reference has 2, candidate has 1".to_string(),
            ]
        );
    }

    #[test]
    fn test_report_default_is_clean() {
        assert!(ValidationReport::default().is_clean());
    }

    #[test]
    fn test_report_flags_follow_messages() {
        let report = ValidationReport {
            errors: Vec::new(),
            warnings: vec!["Extra key: bonus".to_string()],
        };
        assert!(!report.has_errors());
        assert!(report.has_warnings());
        assert!(!report.is_clean());
    }
}
