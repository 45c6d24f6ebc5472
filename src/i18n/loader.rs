//! Language file loading.
//!
//! Language files live in a directory as `<name>.json`, each holding a
//! document of the form `{ "name": "fr", "el": { ... } }`.

use crate::i18n::Language;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised while loading a language file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Invalid language name '{0}'. Expected letters, digits, '-' or '_' (e.g. 'fr', 'zh-cn')")]
    InvalidName(String),

    #[error("Language file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read language file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Language file is empty: {}", .0.display())]
    Empty(PathBuf),

    #[error("Failed to parse language file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Check that a language name is safe to use as a file stem.
fn is_valid_name(name: &str) -> bool {
    if name.is_empty() || name.len() > 20 {
        return false;
    }

    let is_separator = |c: char| c == '-' || c == '_';
    name.chars().all(|c| c.is_ascii_alphanumeric() || is_separator(c))
        && !name.starts_with(is_separator)
        && !name.ends_with(is_separator)
        && !name.contains("--")
        && !name.contains("__")
}

/// Load `dir/<name>.json` as a `Language`.
///
/// # Arguments
/// * `name` - Language name (e.g., "fr"), also used when the file has no `name`
/// * `dir` - Directory holding language files
///
/// # Errors
/// - `InvalidName` when `name` is not a plain identifier
/// - `NotFound` when the file does not exist
/// - `Io` when the file cannot be read
/// - `Empty` when the file has no content
/// - `Parse` when the content is not a valid language document
pub fn load_language_file(name: &str, dir: &Path) -> Result<Language, LoadError> {
    if !is_valid_name(name) {
        return Err(LoadError::InvalidName(name.to_string()));
    }

    let path = dir.join(format!("{name}.json"));
    if !path.exists() {
        return Err(LoadError::NotFound(path));
    }

    let contents = fs::read_to_string(&path).map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;

    if contents.trim().is_empty() {
        return Err(LoadError::Empty(path));
    }

    let language =
        Language::from_json(&contents).map_err(|source| LoadError::Parse { path, source })?;

    if language.name().is_empty() {
        Ok(language.renamed(name))
    } else {
        Ok(language)
    }
}

/// Language loader that caches loaded languages by name.
#[derive(Debug)]
pub struct LanguageLoader {
    dir: PathBuf,
    cache: HashMap<String, Language>,
}

impl LanguageLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: HashMap::new(),
        }
    }

    /// Load a language, reading the file only on the first request.
    ///
    /// # Errors
    /// See [`load_language_file`]. Failures are not cached.
    pub fn load(&mut self, name: &str) -> Result<Language, LoadError> {
        if let Some(language) = self.cache.get(name) {
            return Ok(language.clone());
        }

        match load_language_file(name, &self.dir) {
            Ok(language) => {
                info!(
                    "Loaded language '{}' with {} entries",
                    name,
                    language.entry_count()
                );
                self.cache.insert(name.to_string(), language.clone());
                Ok(language)
            }
            Err(e) => {
                warn!("Failed to load language '{}': {}", name, e);
                Err(e)
            }
        }
    }

    /// Directory the loader reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of cached languages.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}
