//! Internationalization (i18n) module: dotted-key translation lookup.
//!
//! Translation strings live in nested tables keyed by dotted paths such as
//! `pagination.total`. A lookup first asks an optional external handler, then
//! falls back to the active language's table and fills `{name}` placeholders.
//!
//! # Architecture
//!
//! - `entry`: Table value types (`TranslationEntry`, `TranslationTable`, `OptionBag`)
//! - `template`: Placeholder substitution
//! - `resolver`: Dotted-path traversal
//! - `language`: Named tables and the built-in English default
//! - `registry`: Active-language holder bound to a date locale
//! - `translator`: Handler-then-table facade and lookup diagnostics
//! - `loader`: JSON language files
//! - `validator`: Reference-vs-candidate table checks
//! - `metrics`: Lookup counters
//!
//! # Example
//!
//! ```rust
//! use locale_kit::i18n::{OptionBag, Translator};
//!
//! let translator = Translator::new();
//! let mut options = OptionBag::new();
//! options.insert("total".to_string(), "12".to_string());
//! assert_eq!(translator.translate("pagination.total", &options), "Total 12");
//! assert_eq!(translator.t("no.such.key"), "");
//! ```
//!
//! Lookups never fail: a missing key, a missing placeholder value or a
//! declining handler all degrade to empty strings. Use
//! [`Translator::lookup`] when the caller needs to know which stage answered.

mod entry;
mod language;
mod loader;
mod metrics;
mod registry;
pub mod resolver;
pub mod template;
mod translator;
mod validator;

pub use entry::{OptionBag, TranslationEntry, TranslationTable};
pub use language::Language;
pub use loader::{load_language_file, LanguageLoader, LoadError};
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageRegistry, RegistryState};
pub use resolver::resolve;
pub use template::interpolate;
pub use translator::{Handler, Resolution, ResolutionSource, Translator};
pub use validator::{LanguageValidator, ValidationReport};

use crate::date_locale::ChronoDateLocale;
use std::sync::{Arc, OnceLock};

static GLOBAL_DATE_LOCALE: OnceLock<Arc<ChronoDateLocale>> = OnceLock::new();
static GLOBAL_TRANSLATOR: OnceLock<Translator> = OnceLock::new();

/// Date locale bound to the process-wide translator.
pub fn global_date_locale() -> Arc<ChronoDateLocale> {
    Arc::clone(GLOBAL_DATE_LOCALE.get_or_init(|| Arc::new(ChronoDateLocale::new())))
}

/// Get the process-wide translator.
///
/// Initialized on first access with the built-in default language and bound
/// to [`global_date_locale`]. Prefer owning a [`Translator`] where the
/// application has a natural place to keep one.
pub fn global() -> &'static Translator {
    GLOBAL_TRANSLATOR.get_or_init(|| Translator::with_date_locale(global_date_locale()))
}

/// Translate `path` with the process-wide translator, without options.
pub fn t(path: &str) -> String {
    global().t(path)
}

/// Translate `path` with the process-wide translator.
pub fn translate(path: &str, options: &OptionBag) -> String {
    global().translate(path, options)
}

/// Register the process-wide external handler, replacing any previous one.
pub fn register_handler<F>(handler: F)
where
    F: Fn(&str, &OptionBag) -> Option<String> + Send + Sync + 'static,
{
    global().register_handler(handler);
}

/// Install the process-wide active language; `None` is a no-op.
pub fn use_language(language: Option<Language>) {
    global().set_active_language(language);
}

/// Alias for [`use_language`].
pub fn set_locale(language: Option<Language>) {
    use_language(language);
}
