//! Scroll-up link that appears once the page scrolls far enough.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Floating link back to the top of the page.
#[component]
pub fn ScrollTop() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let visible = move || ui.get().show_scroll_up;

    view! {
        <a
            href="#home"
            class="scrollup"
            class:show-scroll=visible
            id="scroll-up"
            aria-label="Back to top"
        >
            "\u{2191}"
        </a>
    }
}
