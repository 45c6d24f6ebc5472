//! Translator facade: external handler first, built-in table second.
//!
//! A `Translator` is the context object applications hold. It owns the
//! language registry, the optional external handler and the lookup metrics.
//! Every method takes `&self`, so one translator can be shared across threads
//! behind an `Arc`.

use crate::date_locale::DateLocale;
use crate::i18n::{
    interpolate, resolve, Language, LanguageRegistry, OptionBag, RegistryState,
    TranslationEntry, TranslationMetrics,
};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// External resolution function consulted before the built-in table.
///
/// Returning `None` or an empty string defers to the built-in table.
pub type Handler = Arc<dyn Fn(&str, &OptionBag) -> Option<String> + Send + Sync>;

/// Where a lookup's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// The registered external handler answered
    Handler,

    /// The active language's table answered
    Table,

    /// Nothing answered; the value is empty
    Missing,
}

/// Result of a lookup with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The translated string; empty when `source` is `Missing`
    pub value: String,

    /// Which stage produced `value`
    pub source: ResolutionSource,
}

impl Resolution {
    fn missing() -> Self {
        Self {
            value: String::new(),
            source: ResolutionSource::Missing,
        }
    }

    /// Whether any stage produced a value.
    pub fn is_resolved(&self) -> bool {
        self.source != ResolutionSource::Missing
    }
}

/// Translation context: active language, external handler and metrics.
pub struct Translator {
    registry: LanguageRegistry,
    handler: RwLock<Option<Handler>>,
    metrics: TranslationMetrics,
}

impl Translator {
    /// Create a translator with the built-in default language.
    pub fn new() -> Self {
        Self::with_registry(LanguageRegistry::new())
    }

    /// Create a translator whose language switches update `date_locale`.
    pub fn with_date_locale(date_locale: Arc<dyn DateLocale>) -> Self {
        Self::with_registry(LanguageRegistry::with_date_locale(date_locale))
    }

    /// Create a translator around an existing registry.
    pub fn with_registry(registry: LanguageRegistry) -> Self {
        Self {
            registry,
            handler: RwLock::new(None),
            metrics: TranslationMetrics::new(),
        }
    }

    /// Register the external handler, replacing any previous one.
    pub fn register_handler<F>(&self, handler: F)
    where
        F: Fn(&str, &OptionBag) -> Option<String> + Send + Sync + 'static,
    {
        let handler: Handler = Arc::new(handler);
        *self.handler.write().unwrap_or_else(PoisonError::into_inner) = Some(handler);
    }

    /// Remove the external handler.
    pub fn clear_handler(&self) {
        *self.handler.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Whether an external handler is registered.
    pub fn has_handler(&self) -> bool {
        self.handler
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Translate `path` without placeholder values.
    pub fn t(&self, path: &str) -> String {
        self.translate(path, &OptionBag::new())
    }

    /// Translate a dotted path.
    ///
    /// The handler is asked first and a non-empty answer is returned as-is.
    /// Otherwise the active table is searched and the text is interpolated.
    ///
    /// # Arguments
    /// * `path` - Dot-notation key (e.g., "pagination.total")
    /// * `options` - Placeholder values
    ///
    /// # Returns
    /// The translated string, or an empty string if nothing answered. Lists
    /// and nested tables are not text and also yield an empty string.
    pub fn translate(&self, path: &str, options: &OptionBag) -> String {
        self.lookup(path, options).value
    }

    /// Translate `path` and report which stage answered.
    pub fn lookup(&self, path: &str, options: &OptionBag) -> Resolution {
        if let Some(value) = self.ask_handler(path, options) {
            self.metrics.record_handler_answer();
            return Resolution {
                value,
                source: ResolutionSource::Handler,
            };
        }

        let language = self.registry.active_language();
        match resolve(path, language.table()).and_then(TranslationEntry::as_text) {
            Some(text) => {
                self.metrics.record_table_hit();
                Resolution {
                    value: interpolate(text, options),
                    source: ResolutionSource::Table,
                }
            }
            None => {
                self.metrics.record_miss();
                debug!(
                    "Missing translation key '{}' in language '{}'",
                    path,
                    language.name()
                );
                Resolution::missing()
            }
        }
    }

    /// Translate a path whose value is a list.
    ///
    /// Reads the active table only; the handler is not consulted.
    ///
    /// # Returns
    /// * Each list element interpolated with `options`
    /// * A one-element list for a text value
    /// * An empty list for a miss or a nested table
    pub fn translate_list(&self, path: &str, options: &OptionBag) -> Vec<String> {
        let language = self.registry.active_language();
        match resolve(path, language.table()) {
            Some(TranslationEntry::List(items)) => items
                .iter()
                .map(|item| interpolate(item, options))
                .collect(),
            Some(TranslationEntry::Text(text)) => vec![interpolate(text, options)],
            Some(TranslationEntry::Nested(_)) | None => Vec::new(),
        }
    }

    /// Install a new active language; `None` keeps the current one.
    pub fn set_active_language(&self, language: Option<Language>) {
        self.registry.set_active_language(language);
    }

    /// Alias for [`Translator::set_active_language`].
    pub fn set_locale(&self, language: Option<Language>) {
        self.registry.set_locale(language);
    }

    /// Get the active language.
    pub fn active_language(&self) -> Arc<Language> {
        self.registry.active_language()
    }

    /// Whether a language has been installed since creation.
    pub fn state(&self) -> RegistryState {
        self.registry.state()
    }

    /// Lookup counters for this translator.
    pub fn metrics(&self) -> &TranslationMetrics {
        &self.metrics
    }

    /// Call the handler, if any, treating an empty answer as no answer.
    fn ask_handler(&self, path: &str, options: &OptionBag) -> Option<String> {
        // Clone out of the lock so the handler may re-enter this translator
        let handler = self
            .handler
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()?;

        match handler(path, options) {
            Some(value) if !value.is_empty() => Some(value),
            _ => {
                self.metrics.record_handler_veto();
                debug!("Handler declined '{}', using built-in table", path);
                None
            }
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("registry", &self.registry)
            .field("has_handler", &self.has_handler())
            .finish_non_exhaustive()
    }
}
