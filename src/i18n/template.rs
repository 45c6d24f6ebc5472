//! Placeholder substitution for translation strings.
//!
//! Placeholders take the form `{name}` where `name` is a run of ASCII word
//! characters. Unknown names are replaced with an empty string.

use crate::i18n::OptionBag;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

// Compiled once, shared by every call
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").unwrap())
}

/// Substitute `{name}` placeholders in `template` with values from `options`.
///
/// Returns the template unchanged when it is empty or when no options were
/// supplied. There is no escape syntax for literal braces.
///
/// # Example
/// ```
/// use locale_kit::i18n::{interpolate, OptionBag};
///
/// let mut options = OptionBag::new();
/// options.insert("name".to_string(), "Sam".to_string());
/// assert_eq!(interpolate("hello {name}", &options), "hello Sam");
/// ```
pub fn interpolate(template: &str, options: &OptionBag) -> String {
    if template.is_empty() || options.is_empty() {
        return template.to_string();
    }

    let replaced: Cow<'_, str> = placeholder_regex().replace_all(template, |caps: &Captures| {
        options.get(&caps[1]).cloned().unwrap_or_default()
    });
    replaced.into_owned()
}

/// Names of all placeholders in `template`, in order of appearance.
pub fn placeholders(template: &str) -> Vec<String> {
    placeholder_regex()
        .captures_iter(template)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect()
}
