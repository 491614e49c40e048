//! Languages, text direction, and translation catalogs.
//!
//! Catalogs are flat key→string maps deserialized from the locale JSON
//! documents under `site/assets/locales/`. Lookup falls back to English
//! and then to the key itself, so missing catalogs degrade to readable
//! (if untranslated) text instead of blanks.

#[cfg(test)]
#[path = "lang_test.rs"]
mod lang_test;

use std::collections::HashMap;

use serde::Deserialize;

/// Languages the site ships catalogs for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Id,
    Es,
    Ar,
}

/// Layout direction for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// The value for the `<html dir>` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl Language {
    /// All languages, in the order the switcher lists them.
    pub const ALL: [Self; 4] = [Self::En, Self::Id, Self::Es, Self::Ar];

    /// ISO 639-1 code, also the storage value and catalog file stem.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Id => "id",
            Self::Es => "es",
            Self::Ar => "ar",
        }
    }

    /// Parse a stored or routed code. Unknown codes are rejected.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "id" => Some(Self::Id),
            "es" => Some(Self::Es),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    /// Name shown in the language switcher, in the language itself.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Id => "Bahasa Indonesia",
            Self::Es => "Español",
            Self::Ar => "العربية",
        }
    }

    /// Flag shown next to the name.
    #[must_use]
    pub fn flag(self) -> &'static str {
        match self {
            Self::En => "\u{1f1ec}\u{1f1e7}",
            Self::Id => "\u{1f1ee}\u{1f1e9}",
            Self::Es => "\u{1f1ea}\u{1f1f8}",
            Self::Ar => "\u{1f1f8}\u{1f1e6}",
        }
    }

    #[must_use]
    pub fn direction(self) -> TextDirection {
        match self {
            Self::Ar => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        }
    }
}

/// One language's translations: flat dotted keys to display strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Deserialize a locale JSON document.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when the document is not
    /// a flat string map.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The loaded catalogs, with English-then-key fallback on lookup.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    catalogs: HashMap<Language, Catalog>,
}

impl Translations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, language: Language, catalog: Catalog) {
        self.catalogs.insert(language, catalog);
    }

    #[must_use]
    pub fn is_loaded(&self, language: Language) -> bool {
        self.catalogs.contains_key(&language)
    }

    /// Resolve `key` in `language`, falling back to English and finally to
    /// the key itself.
    #[must_use]
    pub fn lookup<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        self.catalogs
            .get(&language)
            .and_then(|catalog| catalog.get(key))
            .or_else(|| {
                self.catalogs
                    .get(&Language::En)
                    .and_then(|catalog| catalog.get(key))
            })
            .unwrap_or(key)
    }
}
