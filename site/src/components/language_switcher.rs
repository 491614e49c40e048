//! Language dropdown with flag and native-language names.

use appearance::lang::Language;
use appearance::overlay::Panel;
use appearance::prefs;
use leptos::prelude::*;

use crate::state::i18n::I18nState;
use crate::state::ui::UiState;
use crate::util::{dom, storage::LocalStore};

/// Apply a language: update state, the `<html>` attributes, and storage.
fn select_language(i18n: RwSignal<I18nState>, language: Language) {
    i18n.update(|state| state.language = language);
    dom::set_language_attrs(language.code(), language.direction().as_str());
    prefs::save_language(&mut LocalStore, language);
}

/// Dropdown listing every shipped language.
///
/// Shows the current language's flag and name; options switch the page
/// language, persist the choice, and close the dropdown. A full-screen
/// overlay closes it on an outside click.
#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let i18n = expect_context::<RwSignal<I18nState>>();

    let open = move || ui.get().overlays.is_open(Panel::LanguageMenu);
    let current = move || i18n.get().language;

    let on_toggle = move |_| {
        ui.update(|state| state.overlays.toggle(Panel::LanguageMenu));
    };
    let on_overlay = move |_| {
        ui.update(|state| state.overlays.close(Panel::LanguageMenu));
    };

    let options = Language::ALL
        .into_iter()
        .map(|language| {
            let is_active = move || current() == language;
            let on_click = move |_| {
                select_language(i18n, language);
                ui.update(|state| state.overlays.close(Panel::LanguageMenu));
            };
            view! {
                <li>
                    <button
                        class="language-switcher__option"
                        class:active=is_active
                        on:click=on_click
                    >
                        <span class="language-switcher__flag">{language.flag()}</span>
                        <span>{language.display_name()}</span>
                    </button>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="language-switcher" class:active=open id="language-switcher">
            <button class="language-switcher__current" on:click=on_toggle>
                <span class="language-switcher__flag">{move || current().flag()}</span>
                <span>{move || current().display_name()}</span>
            </button>
            <ul class="language-switcher__list">{options}</ul>
            <Show when=open>
                <div class="language-switcher__overlay" on:click=on_overlay></div>
            </Show>
        </div>
    }
}
