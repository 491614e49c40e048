//! Fixed page header: logo, nav menu, and the menu toggle/close buttons.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use appearance::overlay::Panel;
use leptos::prelude::*;

use crate::state::i18n::I18nState;
use crate::state::ui::UiState;

/// Nav link definition: translation key and target section.
struct NavLink {
    key: &'static str,
    href: &'static str,
    section: &'static str,
}

const NAV_LINKS: &[NavLink] = &[
    NavLink { key: "nav.home", href: "#home", section: "home" },
    NavLink { key: "nav.about", href: "#about", section: "about" },
    NavLink { key: "nav.services", href: "#services", section: "services" },
    NavLink { key: "nav.projects", href: "#projects", section: "projects" },
    NavLink { key: "nav.contact", href: "#contact", section: "contact" },
];

/// Fixed header with the nav menu.
///
/// The menu opens as an overlay on small screens; opening it closes any
/// other overlay, clicking a link closes it again, and the header gains a
/// shadow class once the page scrolls.
#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let i18n = expect_context::<RwSignal<I18nState>>();

    let t = move |key: &'static str| i18n.with(|state| state.t(key));

    let menu_open = move || ui.get().overlays.is_open(Panel::NavMenu);
    let has_shadow = move || ui.get().header_shadow;

    let on_toggle = move |_| {
        ui.update(|state| state.overlays.open(Panel::NavMenu));
    };
    let on_close = move |_| {
        ui.update(|state| state.overlays.close(Panel::NavMenu));
    };

    let links = NAV_LINKS
        .iter()
        .map(|link| {
            let key = link.key;
            let section = link.section;
            let is_active =
                move || ui.get().active_section.as_deref() == Some(section);
            let on_click = move |_| {
                ui.update(|state| state.overlays.close(Panel::NavMenu));
            };
            view! {
                <li class="nav__item">
                    <a
                        href=link.href
                        class="nav__link"
                        class:active-link=is_active
                        on:click=on_click
                    >
                        {move || t(key)}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <header class="header" class:shadow-header=has_shadow id="header">
            <nav class="nav container">
                <a href="#home" class="nav__logo">
                    {move || t("nav.logo")}
                </a>

                <div class="nav__menu" class:show-menu=menu_open id="nav-menu">
                    <ul class="nav__list">{links}</ul>
                    <button class="nav__close" on:click=on_close aria-label="Close menu">
                        "\u{2715}"
                    </button>
                </div>

                <div class="nav__buttons">
                    <button class="nav__toggle" on:click=on_toggle aria-label="Open menu">
                        "\u{2630}"
                    </button>
                </div>
            </nav>
        </header>
    }
}
