//! Localized label text
//!
//! Translation tables are JSON objects mapping the built-in English text to
//! its translation, stored as `tile.<lang>.json` in a translations
//! directory. Any key missing from a table is printed in English.

use std::collections::HashMap;

use log::{debug, info, warn};

#[cfg(feature = "serde")]
use crate::types::{Result, TileError};
#[cfg(feature = "serde")]
use std::path::Path;

pub const KEY_PAGE: &str = "Page";
pub const KEY_ROW: &str = "row";
pub const KEY_COLUMN: &str = "column";
pub const KEY_COVER_PAGE: &str = "cover page";
pub const KEY_TAGLINE: &str = "an open source platform for made-to-measure sewing patterns";

/// Maps a label key to its localized text
pub trait Lookup {
    /// Returns the key itself when no translation is known
    fn lookup(&self, key: &str) -> String;
}

/// Built-in English text
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslation;

impl Lookup for NoTranslation {
    fn lookup(&self, key: &str) -> String {
        key.to_string()
    }
}

/// A loaded translation table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translations {
    language: String,
    entries: HashMap<String, String>,
}

impl Translations {
    pub fn new(language: impl Into<String>, entries: HashMap<String, String>) -> Self {
        Self {
            language: language.into(),
            entries,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load `tile.<language>.json` from `dir`
    #[cfg(feature = "serde")]
    pub async fn load(dir: impl AsRef<Path>, language: &str) -> Result<Self> {
        let path = dir.as_ref().join(translation_file_name(language));
        let bytes = tokio::fs::read(&path).await?;
        let entries: HashMap<String, String> = serde_json::from_slice(&bytes).map_err(|e| {
            TileError::Config(format!(
                "Failed to parse language file {}: {}",
                path.display(),
                e
            ))
        })?;
        debug!("Read {} labels from {}", entries.len(), path.display());
        Ok(Self::new(language, entries))
    }
}

impl Lookup for Translations {
    fn lookup(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

pub fn translation_file_name(language: &str) -> String {
    format!("tile.{}.json", language)
}

/// Language codes are two ASCII letters
pub fn is_language_code(language: &str) -> bool {
    language.len() == 2 && language.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Load the table for `language`, falling back to English text.
///
/// An invalid code or an unreadable table is reported and never fatal.
#[cfg(feature = "serde")]
pub async fn translations_for(dir: impl AsRef<Path>, language: &str) -> Translations {
    if !is_language_code(language) {
        warn!("Invalid language code '{}'", language);
        return Translations::default();
    }

    match Translations::load(dir, language).await {
        Ok(translations) if translations.is_empty() => {
            warn!("Language file for '{}' has no labels", translations.language());
            translations
        }
        Ok(translations) => {
            info!(
                "Using {} labels for language '{}'",
                translations.len(),
                translations.language()
            );
            translations
        }
        Err(TileError::Io(e))
            if e.kind() == std::io::ErrorKind::NotFound
                && language == crate::constants::DEFAULT_LANGUAGE =>
        {
            debug!("No table for '{}', using built-in text", language);
            Translations::default()
        }
        Err(e) => {
            warn!(
                "Error reading language file for '{}' ({}). Using built-in text",
                language, e
            );
            Translations::default()
        }
    }
}

/// All label strings printed on the sheets
#[derive(Debug, Clone, PartialEq)]
pub struct Labels {
    pub page: String,
    pub row: String,
    pub column: String,
    pub cover_page: String,
    pub tagline: String,
}

impl Labels {
    pub fn resolve(lookup: &dyn Lookup) -> Self {
        Self {
            page: lookup.lookup(KEY_PAGE),
            row: lookup.lookup(KEY_ROW),
            column: lookup.lookup(KEY_COLUMN),
            cover_page: lookup.lookup(KEY_COVER_PAGE),
            tagline: lookup.lookup(KEY_TAGLINE),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::resolve(&NoTranslation)
    }
}
