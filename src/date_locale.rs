//! Date-formatting locale binding.
//!
//! The translator does not format dates itself. When the active language
//! changes it tells a `DateLocale` implementation the new locale name and the
//! implementation decides what that means for its formatting library.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Locale, TimeZone};
use std::fmt::{self, Display, Write};
use std::sync::{PoisonError, RwLock};
use tracing::{debug, warn};

/// Check that a strftime-style format has no unknown specifiers.
pub fn is_valid_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Receiver of active-locale changes.
pub trait DateLocale: Send + Sync {
    /// Bind `name` (e.g. "fr", "zh-cn") as the active date locale.
    fn set_active_locale(&self, name: &str);
}

/// A `DateLocale` that ignores every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDateLocale;

impl DateLocale for NoopDateLocale {
    fn set_active_locale(&self, _name: &str) {}
}

/// Default regions for bare language codes whose region is not the language
/// code itself (e.g. "en" is "en_US", not "en_EN").
const DEFAULT_REGIONS: &[(&str, &str)] = &[
    ("ar", "ar_SA"),
    ("ca", "ca_ES"),
    ("cs", "cs_CZ"),
    ("da", "da_DK"),
    ("el", "el_GR"),
    ("en", "en_US"),
    ("et", "et_EE"),
    ("eu", "eu_ES"),
    ("fa", "fa_IR"),
    ("he", "he_IL"),
    ("hi", "hi_IN"),
    ("ja", "ja_JP"),
    ("kk", "kk_KZ"),
    ("ko", "ko_KR"),
    ("nb", "nb_NO"),
    ("pt", "pt_PT"),
    ("sl", "sl_SI"),
    ("sr", "sr_RS"),
    ("sv", "sv_SE"),
    ("ta", "ta_IN"),
    ("uk", "uk_UA"),
    ("vi", "vi_VN"),
    ("zh", "zh_CN"),
];

/// Candidate `chrono` locale names for a language identifier, most specific first.
fn candidate_names(name: &str) -> Vec<String> {
    let normalized = name.trim().replace('-', "_");
    let mut parts = normalized.splitn(2, '_');
    let language = parts.next().unwrap_or_default().to_lowercase();
    let region = parts.next();

    let mut candidates = Vec::new();
    if let Some(region) = region {
        candidates.push(format!("{}_{}", language, region.to_uppercase()));
    }
    candidates.push(language.clone());
    if let Some((_, full)) = DEFAULT_REGIONS.iter().find(|(code, _)| *code == language) {
        candidates.push((*full).to_string());
    }
    candidates.push(format!("{}_{}", language, language.to_uppercase()));
    candidates.dedup();
    candidates
}

/// Map a language identifier to a `chrono` locale.
///
/// Returns the matched locale name alongside the locale, or `None` if no
/// candidate is known.
pub fn lookup_locale(name: &str) -> Option<(String, Locale)> {
    candidate_names(name).into_iter().find_map(|candidate| {
        Locale::try_from(candidate.as_str())
            .ok()
            .map(|locale| (candidate, locale))
    })
}

/// `DateLocale` backed by `chrono`'s localized formatting.
#[derive(Debug)]
pub struct ChronoDateLocale {
    current: RwLock<(String, Locale)>,
}

impl ChronoDateLocale {
    /// Create a binding starting at the POSIX locale.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(("POSIX".to_string(), Locale::POSIX)),
        }
    }

    /// Name of the currently bound `chrono` locale (e.g. "fr_FR").
    pub fn locale_name(&self) -> String {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .0
            .clone()
    }

    /// The currently bound `chrono` locale.
    pub fn locale(&self) -> Locale {
        self.current.read().unwrap_or_else(PoisonError::into_inner).1
    }

    /// Format `datetime` with a strftime-style `format` in the bound locale.
    ///
    /// # Returns
    /// * `Ok(String)` with the formatted date
    /// * `Err` if `format` contains an unknown specifier (e.g. `%Q`)
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>, format: &str) -> Result<String, fmt::Error>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut out = String::new();
        write!(out, "{}", datetime.format_localized(format, self.locale()))?;
        Ok(out)
    }
}

impl Default for ChronoDateLocale {
    fn default() -> Self {
        Self::new()
    }
}

impl DateLocale for ChronoDateLocale {
    fn set_active_locale(&self, name: &str) {
        match lookup_locale(name) {
            Some((matched, locale)) => {
                debug!("Binding date locale '{}' for language '{}'", matched, name);
                *self.current.write().unwrap_or_else(PoisonError::into_inner) = (matched, locale);
            }
            None => {
                warn!(
                    "No date locale known for language '{}', keeping '{}'",
                    name,
                    self.locale_name()
                );
            }
        }
    }
}
