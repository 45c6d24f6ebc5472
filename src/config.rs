use crate::date_locale::is_valid_format;
use anyhow::{bail, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Language files
    pub locales_dir: PathBuf,
    pub default_language: String,

    // Preview output
    pub date_format: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_language =
            std::env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| "en".to_string());
        if default_language.trim().is_empty() {
            bail!("DEFAULT_LANGUAGE must not be empty");
        }

        let date_format =
            std::env::var("DATE_FORMAT").unwrap_or_else(|_| "%A %-d %B %Y".to_string());
        if !is_valid_format(&date_format) {
            bail!("DATE_FORMAT '{}' contains an unknown format specifier", date_format);
        }

        Ok(Self {
            locales_dir: std::env::var("LOCALES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("locales")),
            default_language: default_language.trim().to_string(),
            date_format,
        })
    }

    /// Whether the configured language is the built-in table.
    pub fn uses_builtin_language(&self) -> bool {
        self.default_language == "en"
    }
}
