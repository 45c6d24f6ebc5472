//! Language registry: holder of the active language.
//!
//! The registry owns the currently active `Language` and the date-locale
//! binding that follows it. Installing a language replaces the previous one
//! wholesale and forwards its name to the date locale.

use crate::date_locale::{DateLocale, NoopDateLocale};
use crate::i18n::Language;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info};

/// Whether the registry still holds its initial language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    /// The language the registry was created with is active
    Default,

    /// At least one language has been installed since creation
    Custom,
}

/// Active language paired with the state it was installed in.
#[derive(Debug, Clone)]
struct Active {
    language: Arc<Language>,
    state: RegistryState,
}

/// Active-language holder with a bound date locale.
///
/// The date locale is notified while the install lock is still held, so
/// implementations of [`DateLocale`] must not call back into the registry.
pub struct LanguageRegistry {
    active: RwLock<Active>,
    date_locale: Arc<dyn DateLocale>,
}

impl LanguageRegistry {
    /// Create a registry with the built-in default language and no date binding.
    pub fn new() -> Self {
        Self::with_date_locale(Arc::new(NoopDateLocale))
    }

    /// Create a registry with the built-in default language and a date binding.
    ///
    /// The initial language is not forwarded to the date locale; only
    /// installs are.
    pub fn with_date_locale(date_locale: Arc<dyn DateLocale>) -> Self {
        Self::with_language(Language::builtin_default(), date_locale)
    }

    /// Create a registry starting from `initial`.
    pub fn with_language(initial: Language, date_locale: Arc<dyn DateLocale>) -> Self {
        Self {
            active: RwLock::new(Active {
                language: Arc::new(initial),
                state: RegistryState::Default,
            }),
            date_locale,
        }
    }

    /// Get the active language.
    ///
    /// # Returns
    /// A shared handle; later installs do not affect a handle already taken.
    pub fn active_language(&self) -> Arc<Language> {
        self.snapshot().0
    }

    /// Get the registry state.
    pub fn state(&self) -> RegistryState {
        self.snapshot().1
    }

    /// Get the active language and the registry state from a single read.
    pub fn snapshot(&self) -> (Arc<Language>, RegistryState) {
        let active = self.active.read().unwrap_or_else(PoisonError::into_inner);
        (Arc::clone(&active.language), active.state)
    }

    /// Install a new active language.
    ///
    /// # Arguments
    /// * `language` - Language to install; `None` keeps the current language
    ///   and date locale untouched
    ///
    /// The language replaces the previous one wholesale. A non-empty name is
    /// forwarded to the date locale before the install lock is released, so
    /// concurrent installs leave the date locale matching the final language.
    pub fn set_active_language(&self, language: Option<Language>) {
        let Some(language) = language else {
            debug!("Ignoring request to install an empty language");
            return;
        };

        let name = language.name().to_string();
        let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
        *active = Active {
            language: Arc::new(language),
            state: RegistryState::Custom,
        };
        info!("Active language set to '{}'", name);

        if !name.is_empty() {
            self.date_locale.set_active_locale(&name);
        }
    }

    /// Alias for [`LanguageRegistry::set_active_language`].
    pub fn set_locale(&self, language: Option<Language>) {
        self.set_active_language(language);
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LanguageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (language, state) = self.snapshot();
        f.debug_struct("LanguageRegistry")
            .field("active", &language.name())
            .field("state", &state)
            .finish_non_exhaustive()
    }
}
