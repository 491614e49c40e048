//! Preference persistence behind a key-value store trait.
//!
//! ERROR HANDLING
//! ==============
//! Storage is best-effort: a failing store is logged and the session
//! continues on in-memory state. Loads validate every stored value and
//! fall back to compiled-in defaults, so a poisoned or vandalized store
//! can never put the page into an invalid state.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::collections::HashMap;

use thiserror::Error;

use crate::color;
use crate::consts::DEFAULT_ACCENT;
use crate::font_scale::FontScale;
use crate::lang::Language;
use crate::theme::ThemeMode;

/// Storage key for the accent color hex string.
pub const COLOR_KEY: &str = "firstColor";
/// Storage key for the theme mode.
pub const THEME_KEY: &str = "selectedTheme";
/// Storage key for the font-size multiplier.
pub const FONT_SIZE_KEY: &str = "a11y-font-size";
/// Storage key for the language code.
pub const LANGUAGE_KEY: &str = "language";

/// Failures a backing store can report.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage rejected the operation: {0}")]
    Rejected(String),
}

/// A string key-value store. Implemented over `localStorage` in the
/// browser and over a hash map in tests.
pub trait PrefStore {
    /// Read a key.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the store cannot be read at all;
    /// an absent key is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a key.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the write is refused (quota,
    /// disabled storage).
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a key. Deleting an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the store cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Everything the page restores at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPrefs {
    /// Validated accent color, or the default.
    pub color: String,
    pub theme: ThemeMode,
    pub font_scale: FontScale,
    pub language: Language,
}

impl Default for LoadedPrefs {
    fn default() -> Self {
        Self {
            color: DEFAULT_ACCENT.to_owned(),
            theme: ThemeMode::default(),
            font_scale: FontScale::default(),
            language: Language::default(),
        }
    }
}

fn read_key(store: &dyn PrefStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("could not read {key} from storage: {err}");
            None
        }
    }
}

/// Load and validate all persisted preferences.
#[must_use]
pub fn load(store: &dyn PrefStore) -> LoadedPrefs {
    let mut prefs = LoadedPrefs::default();

    if let Some(raw) = read_key(store, COLOR_KEY) {
        if color::is_valid_hex(&raw) {
            prefs.color = color::expand_hex(&raw);
        }
    }
    if let Some(raw) = read_key(store, THEME_KEY) {
        if let Some(theme) = ThemeMode::parse(&raw) {
            prefs.theme = theme;
        }
    }
    if let Some(raw) = read_key(store, FONT_SIZE_KEY) {
        if let Some(scale) = FontScale::from_stored(&raw) {
            prefs.font_scale = scale;
        }
    }
    if let Some(raw) = read_key(store, LANGUAGE_KEY) {
        if let Some(language) = Language::parse(&raw) {
            prefs.language = language;
        }
    }

    prefs
}

fn write_key(store: &mut dyn PrefStore, key: &str, value: &str) {
    if let Err(err) = store.set(key, value) {
        log::warn!("could not persist {key}: {err}");
    }
}

pub fn save_color(store: &mut dyn PrefStore, hex: &str) {
    write_key(store, COLOR_KEY, hex);
}

pub fn save_theme(store: &mut dyn PrefStore, theme: ThemeMode) {
    write_key(store, THEME_KEY, theme.as_str());
}

pub fn save_font_scale(store: &mut dyn PrefStore, scale: FontScale) {
    write_key(store, FONT_SIZE_KEY, &scale.to_stored());
}

pub fn save_language(store: &mut dyn PrefStore, language: Language) {
    write_key(store, LANGUAGE_KEY, language.code());
}

/// Clear the appearance preferences (color, theme, font scale).
///
/// The stored language survives a reset; it is a content preference, not
/// an appearance one.
pub fn reset(store: &mut dyn PrefStore) {
    for key in [COLOR_KEY, THEME_KEY, FONT_SIZE_KEY] {
        if let Err(err) = store.remove(key) {
            log::warn!("could not clear {key}: {err}");
        }
    }
}

/// In-memory store for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    poisoned: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails, for exercising the degraded
    /// path.
    #[must_use]
    pub fn poisoned() -> Self {
        Self { values: HashMap::new(), poisoned: true }
    }

    /// Seed a value, bypassing the trait.
    pub fn seed(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

impl PrefStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.poisoned {
            return Err(StoreError::Unavailable);
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.poisoned {
            return Err(StoreError::Unavailable);
        }
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.poisoned {
            return Err(StoreError::Unavailable);
        }
        self.values.remove(key);
        Ok(())
    }
}
