#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use appearance::lang::{Language, Translations};

/// i18n state: the selected language and whatever catalogs have loaded.
#[derive(Clone, Debug, Default)]
pub struct I18nState {
    pub language: Language,
    pub translations: Translations,
}

impl I18nState {
    /// Resolve a translation key for the current language.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.translations.lookup(self.language, key).to_owned()
    }
}
