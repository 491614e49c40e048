//! Root application component with context providers and startup wiring.

use appearance::prefs;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{StaticSegment, components::{Route, Router, Routes}};

use crate::components::header::Header;
use crate::components::language_switcher::LanguageSwitcher;
use crate::components::scroll_top::ScrollTop;
use crate::components::theme_sidebar::{ThemeSidebar, sync_surfaces};
use crate::pages::home::HomePage;
use crate::state::a11y::A11yState;
use crate::state::color::{ColorState, ColorSurfaces};
use crate::state::i18n::I18nState;
use crate::state::theme::ThemeState;
use crate::state::ui::UiState;
use crate::util::{dom, i18n as i18n_util, storage::LocalStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, restores persisted preferences,
/// and wires the window-level listeners (scroll effects, Escape).
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Reactive state contexts for all child components.
    let color = RwSignal::new(ColorState::default());
    let surfaces = ColorSurfaces::new(&ColorState::default().model);
    let theme = RwSignal::new(ThemeState::default());
    let a11y = RwSignal::new(A11yState::default());
    let i18n = RwSignal::new(I18nState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(color);
    provide_context(surfaces);
    provide_context(theme);
    provide_context(a11y);
    provide_context(i18n);
    provide_context(ui);

    // Restore persisted preferences, then watch the environment.
    Effect::new(move || {
        let loaded = prefs::load(&LocalStore);

        color.update(|state| {
            state.model.set_hex(&loaded.color);
        });
        sync_surfaces(color, surfaces);
        dom::set_accent_color(&loaded.color);

        theme.set(ThemeState {
            mode: loaded.theme,
            system_dark: dom::system_prefers_dark(),
        });
        a11y.set(A11yState { font_scale: loaded.font_scale });
        i18n.update(|state| state.language = loaded.language);

        dom::watch_system_theme(move |dark| {
            theme.update(|state| state.system_dark = dark);
        });

        // Preload every catalog so language switches are instant.
        leptos::task::spawn_local(async move {
            let catalogs = i18n_util::preload_all().await;
            i18n.update(|state| {
                for (language, catalog) in catalogs {
                    state.translations.insert(language, catalog);
                }
            });
        });

        dom::on_window_scroll(move || {
            let scroll_y = dom::scroll_y();
            let sections = dom::measure_sections();
            ui.update(|state| state.on_scroll(scroll_y, &sections));
        });

        dom::on_window_keydown(move |key| {
            if key == "Escape" {
                ui.update(|state| {
                    state.overlays.escape();
                });
            }
        });
    });

    // Derived DOM writes: each environment surface follows its state.
    Effect::new(move || {
        dom::set_dark_theme(theme.get().is_dark());
    });
    Effect::new(move || {
        dom::set_font_multiplier(a11y.get().font_scale.multiplier());
    });
    Effect::new(move || {
        let language = i18n.get().language;
        dom::set_language_attrs(language.code(), language.direction().as_str());
    });
    Effect::new(move || {
        dom::set_scroll_lock(ui.get().overlays.scroll_locked());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/site.css"/>
        <Title text="Portfolio"/>

        <Router>
            <Header/>
            <LanguageSwitcher/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
            <ThemeSidebar/>
            <ScrollTop/>
        </Router>
    }
}
