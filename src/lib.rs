//! Dotted-key translation lookup with placeholder templates, a pluggable
//! external handler and a date locale that follows the active language.

pub mod config;
pub mod date_locale;
pub mod i18n;
