//! Imperative DOM writes the reactive layer can't express.
//!
//! CSS custom properties on `<body>`/`<html>`, the dark-theme class, the
//! `lang`/`dir` attributes, and scroll-position reads. Requires a browser
//! environment; every function is a no-op on the server.

use appearance::scroll::Section;

#[cfg(feature = "hydrate")]
fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window()?.document()?.body()
}

#[cfg(feature = "hydrate")]
fn document_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

/// Paint the accent color custom property on `<body>`.
pub fn set_accent_color(hex: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = body() {
            let _ = body.style().set_property("--first-color", hex);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = hex;
    }
}

/// Remove the accent override so the stylesheet default shows through.
pub fn clear_accent_color() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = body() {
            let _ = body.style().remove_property("--first-color");
        }
    }
}

/// Apply or remove the `dark-theme` class on `<body>`.
pub fn set_dark_theme(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = body() {
            let class_list = body.class_list();
            if enabled {
                let _ = class_list.add_1("dark-theme");
            } else {
                let _ = class_list.remove_1("dark-theme");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Set the font-size multiplier custom property on `<html>`.
pub fn set_font_multiplier(multiplier: f64) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        if let Some(root) = document_element() {
            if let Some(root) = root.dyn_ref::<web_sys::HtmlElement>() {
                let _ = root
                    .style()
                    .set_property("--font-size-multiplier", &multiplier.to_string());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = multiplier;
    }
}

/// Update `<html lang>` and `<html dir>` for the selected language.
pub fn set_language_attrs(lang: &str, dir: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(root) = document_element() {
            let _ = root.set_attribute("lang", lang);
            let _ = root.set_attribute("dir", dir);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (lang, dir);
    }
}

/// Lock or release body scrolling while the sidebar is open.
pub fn set_scroll_lock(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = body() {
            let value = if locked { "hidden" } else { "" };
            let _ = body.style().set_property("overflow", value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}

/// Whether the system currently prefers a dark color scheme.
#[must_use]
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Subscribe to system color-scheme changes. The callback receives the
/// new dark preference; the subscription lives for the page session.
pub fn watch_system_theme(on_change: impl Fn(bool) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(mq) = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
            .flatten()
        else {
            return;
        };
        let callback = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
            move |event: web_sys::MediaQueryListEvent| on_change(event.matches()),
        );
        let _ = mq.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
        // Page-lifetime listener; the closure is intentionally leaked.
        callback.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &on_change;
    }
}

/// Run `callback` on every window scroll event. The subscription lives
/// for the page session.
pub fn on_window_scroll(callback: impl Fn() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut()>::new(callback);
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &callback;
    }
}

/// Run `callback` with the key name on every window keydown. The
/// subscription lives for the page session.
pub fn on_window_keydown(callback: impl Fn(String) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |event: web_sys::KeyboardEvent| callback(event.key()),
        );
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &callback;
    }
}

/// The window's current vertical scroll offset.
#[must_use]
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Measure every `section[id]` on the page for active-link resolution.
#[must_use]
pub fn measure_sections() -> Vec<Section> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let Ok(nodes) = document.query_selector_all("section[id]") else {
            return Vec::new();
        };
        let mut sections = Vec::new();
        for index in 0..nodes.length() {
            let Some(node) = nodes.item(index) else {
                continue;
            };
            let Some(element) = node.dyn_ref::<web_sys::HtmlElement>() else {
                continue;
            };
            let id = element.id();
            if id.is_empty() {
                continue;
            }
            sections.push(Section::new(
                id,
                f64::from(element.offset_top()),
                f64::from(element.offset_height()),
            ));
        }
        sections
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}
