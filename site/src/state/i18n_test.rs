use super::*;

use appearance::lang::Catalog;

fn loaded() -> I18nState {
    let mut state = I18nState::default();
    let en = Catalog::from_json(r#"{"nav.home": "Home"}"#).unwrap_or_default();
    let es = Catalog::from_json(r#"{"nav.home": "Inicio"}"#).unwrap_or_default();
    state.translations.insert(Language::En, en);
    state.translations.insert(Language::Es, es);
    state
}

#[test]
fn default_language_is_english() {
    assert_eq!(I18nState::default().language, Language::En);
}

#[test]
fn t_resolves_in_the_current_language() {
    let mut state = loaded();
    assert_eq!(state.t("nav.home"), "Home");
    state.language = Language::Es;
    assert_eq!(state.t("nav.home"), "Inicio");
}

#[test]
fn t_degrades_to_the_key_before_catalogs_load() {
    let state = I18nState::default();
    assert_eq!(state.t("nav.home"), "nav.home");
}
