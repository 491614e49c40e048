//! Theme sidebar: accent-color picker, theme options, font-size
//! controls, and the reset button.
//!
//! The color surface is the 2-D saturation/lightness canvas plus a hue
//! slider, a free-text hex field, and preset swatches. All color math and
//! state lives in `appearance`; this component translates pointer events
//! into model mutations and pushes the result back out through the
//! renderer seam implemented by [`ColorSurfaces`].

#[cfg(test)]
#[path = "theme_sidebar_test.rs"]
mod theme_sidebar_test;

use appearance::model::PickerArea;
use appearance::overlay::Panel;
use appearance::prefs;
use appearance::render;
use appearance::theme::ThemeMode;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use crate::state::a11y::A11yState;
use crate::state::color::{ColorState, ColorSurfaces};
use crate::state::i18n::I18nState;
use crate::state::theme::ThemeState;
use crate::state::ui::UiState;
use crate::util::{dom, storage::LocalStore};

/// Preset swatch definition: canonical hex and aria-label key.
struct Swatch {
    hex: &'static str,
    aria_key: &'static str,
}

const SWATCHES: &[Swatch] = &[
    Swatch { hex: "#ff5c1a", aria_key: "colorSwitcher.swatchOrange" },
    Swatch { hex: "#e63946", aria_key: "colorSwitcher.swatchRed" },
    Swatch { hex: "#ffbe0b", aria_key: "colorSwitcher.swatchYellow" },
    Swatch { hex: "#2a9d8f", aria_key: "colorSwitcher.swatchTeal" },
    Swatch { hex: "#00b4d8", aria_key: "colorSwitcher.swatchCyan" },
    Swatch { hex: "#3a86ff", aria_key: "colorSwitcher.swatchBlue" },
    Swatch { hex: "#9b5de5", aria_key: "colorSwitcher.swatchPurple" },
    Swatch { hex: "#f15bb5", aria_key: "colorSwitcher.swatchPink" },
];

/// Push the current model through the render seam, paint the accent onto
/// the document, and persist it.
fn commit_color(color: RwSignal<ColorState>, surfaces: ColorSurfaces) {
    let mut surfaces = surfaces;
    color.with_untracked(|state| {
        render::sync(&state.model, &mut surfaces);
        dom::set_accent_color(state.model.hex());
        prefs::save_color(&mut LocalStore, state.model.hex());
    });
}

/// Repaint every surface from the model without persisting. Startup and
/// reset restore state; neither should write the color key back.
pub fn sync_surfaces(color: RwSignal<ColorState>, surfaces: ColorSurfaces) {
    let mut surfaces = surfaces;
    color.with_untracked(|state| {
        render::sync(&state.model, &mut surfaces);
    });
}

/// Apply a pointer position over the picker canvas to the model.
fn pick_at(
    color: RwSignal<ColorState>,
    surfaces: ColorSurfaces,
    canvas: NodeRef<html::Div>,
    client_x: f64,
    client_y: f64,
) {
    let Some(element) = canvas.get_untracked() else {
        return;
    };
    let rect = element.get_bounding_client_rect();
    let area = PickerArea::new(rect.width(), rect.height());
    let (saturation, lightness) =
        area.pointer_to_sl(client_x - rect.left(), client_y - rect.top());
    color.update(|state| state.model.set_picker(saturation, lightness));
    commit_color(color, surfaces);
}

/// The theme sidebar and its floating open button.
#[component]
pub fn ThemeSidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let i18n = expect_context::<RwSignal<I18nState>>();
    let color = expect_context::<RwSignal<ColorState>>();
    let surfaces = expect_context::<ColorSurfaces>();
    let theme = expect_context::<RwSignal<ThemeState>>();
    let a11y = expect_context::<RwSignal<A11yState>>();

    let t = move |key: &'static str| i18n.with(|state| state.t(key));

    let open = move || ui.get().overlays.is_open(Panel::ThemeSidebar);
    let on_open = move |_| {
        ui.update(|state| state.overlays.open(Panel::ThemeSidebar));
    };
    let on_close = move |_| {
        ui.update(|state| state.overlays.close(Panel::ThemeSidebar));
    };

    // ── Picker canvas ─────────────────────────────────────────
    // Pointer events unify mouse and touch; the gesture ends when the
    // pointer is released or leaves the canvas.
    let canvas_ref = NodeRef::<html::Div>::new();

    let on_pointer_down = move |event: ev::PointerEvent| {
        event.prevent_default();
        color.update(|state| state.drag.begin());
        pick_at(
            color,
            surfaces,
            canvas_ref,
            f64::from(event.client_x()),
            f64::from(event.client_y()),
        );
    };
    let on_pointer_move = move |event: ev::PointerEvent| {
        if color.with_untracked(|state| state.drag.is_dragging()) {
            pick_at(
                color,
                surfaces,
                canvas_ref,
                f64::from(event.client_x()),
                f64::from(event.client_y()),
            );
        }
    };
    let on_pointer_up = move |_| {
        color.update(|state| state.drag.end());
    };
    let on_pointer_leave = move |_| {
        color.update(|state| state.drag.end());
    };

    let cursor_left = move || format!("{}%", surfaces.cursor.get().0);
    let cursor_top = move || format!("{}%", surfaces.cursor.get().1);
    let canvas_background = move || {
        format!(
            "linear-gradient(to bottom, transparent, #000), \
             linear-gradient(to right, #fff, hsl({}, 100%, 50%))",
            surfaces.canvas_hue.get()
        )
    };

    // ── Hue slider ────────────────────────────────────────────
    let on_hue_input = move |event: ev::Event| {
        if let Ok(hue) = event_target_value(&event).parse::<i32>() {
            color.update(|state| state.model.set_hue(hue));
            commit_color(color, surfaces);
        }
    };

    // ── Hex field ─────────────────────────────────────────────
    let on_hex_input = move |event: ev::Event| {
        let raw = event_target_value(&event);
        let mut applied = false;
        color.update(|state| applied = state.model.set_hex(&raw));
        if applied {
            commit_color(color, surfaces);
        }
    };
    let on_hex_blur = move |_| {
        // Self-heal: an invalid field is overwritten with the live color.
        let hex = color.with_untracked(|state| state.model.hex().to_owned());
        surfaces.hex_field.set(hex);
    };

    // ── Presets ───────────────────────────────────────────────
    let swatches = SWATCHES
        .iter()
        .map(|swatch| {
            let hex = swatch.hex;
            let aria_key = swatch.aria_key;
            let is_active = move || surfaces.active_swatch.get() == hex;
            let on_click = move |_| {
                color.update(|state| {
                    state.model.set_hex(hex);
                });
                commit_color(color, surfaces);
            };
            view! {
                <button
                    class="color-swatch"
                    class:active=is_active
                    style:background=hex
                    aria-label=move || t(aria_key)
                    on:click=on_click
                ></button>
            }
        })
        .collect::<Vec<_>>();

    // ── Theme options ─────────────────────────────────────────
    let theme_options = ThemeMode::ALL
        .into_iter()
        .map(|mode| {
            let is_active = move || theme.get().mode == mode;
            let label_key: &'static str = match mode {
                ThemeMode::Light => "colorSwitcher.light",
                ThemeMode::Dark => "colorSwitcher.dark",
                ThemeMode::Auto => "colorSwitcher.auto",
            };
            let on_click = move |_| {
                theme.update(|state| state.mode = mode);
                prefs::save_theme(&mut LocalStore, mode);
            };
            view! {
                <button class="theme-option" class:active=is_active on:click=on_click>
                    <span class="theme-option__label">{move || t(label_key)}</span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    // ── Font size ─────────────────────────────────────────────
    let on_font_decrease = move |_| {
        a11y.update(|state| {
            if state.font_scale.decrease() {
                prefs::save_font_scale(&mut LocalStore, state.font_scale);
            }
        });
    };
    let on_font_increase = move |_| {
        a11y.update(|state| {
            if state.font_scale.increase() {
                prefs::save_font_scale(&mut LocalStore, state.font_scale);
            }
        });
    };
    let font_display = move || a11y.get().display();
    let font_at_min = move || a11y.get().font_scale.at_min();
    let font_at_max = move || a11y.get().font_scale.at_max();

    // ── Reset ─────────────────────────────────────────────────
    let on_reset = move |_| {
        prefs::reset(&mut LocalStore);
        dom::clear_accent_color();
        color.update(|state| state.model.reset());
        sync_surfaces(color, surfaces);
        theme.update(|state| state.mode = ThemeMode::default());
        a11y.update(|state| state.font_scale = appearance::font_scale::FontScale::default());
    };

    view! {
        <button
            class="floating-theme-button"
            id="floating-theme-button"
            aria-label=move || t("colorSwitcher.open")
            on:click=on_open
        >
            "\u{1f3a8}"
        </button>

        <Show when=open>
            <div class="theme-sidebar-overlay" on:click=on_close></div>
        </Show>

        <aside class="theme-sidebar" class:open=open id="theme-sidebar">
            <header class="theme-sidebar__header">
                <h2>{move || t("colorSwitcher.title")}</h2>
                <button class="theme-sidebar__close" on:click=on_close aria-label="Close">
                    "\u{2715}"
                </button>
            </header>

            <section class="theme-sidebar__section">
                <h3>{move || t("colorSwitcher.accent")}</h3>

                <div
                    class="color-canvas"
                    id="color-canvas"
                    node_ref=canvas_ref
                    style:background=canvas_background
                    on:pointerdown=on_pointer_down
                    on:pointermove=on_pointer_move
                    on:pointerup=on_pointer_up
                    on:pointerleave=on_pointer_leave
                >
                    <div
                        class="canvas-cursor"
                        id="canvas-cursor"
                        style:left=cursor_left
                        style:top=cursor_top
                    ></div>
                </div>

                <input
                    type="range"
                    class="hue-slider"
                    id="hue-slider"
                    min="0"
                    max="359"
                    prop:value=move || surfaces.hue.get().to_string()
                    on:input=on_hue_input
                />

                <div class="color-row">
                    <div
                        class="color-preview"
                        id="color-preview"
                        style:background=move || surfaces.preview.get()
                    ></div>
                    <input
                        type="text"
                        class="color-hex"
                        id="color-hex"
                        prop:value=move || surfaces.hex_field.get()
                        on:input=on_hex_input
                        on:blur=on_hex_blur
                    />
                </div>

                <div class="color-swatches">{swatches}</div>
            </section>

            <section class="theme-sidebar__section">
                <h3>{move || t("colorSwitcher.theme")}</h3>
                <div class="theme-options">{theme_options}</div>
            </section>

            <section class="theme-sidebar__section">
                <h3>{move || t("colorSwitcher.fontSize")}</h3>
                <div class="font-size-controls">
                    <button
                        id="decrease-font"
                        on:click=on_font_decrease
                        disabled=font_at_min
                        aria-label=move || t("colorSwitcher.decreaseFont")
                    >
                        "\u{2212}"
                    </button>
                    <span id="font-size-display">{font_display}</span>
                    <button
                        id="increase-font"
                        on:click=on_font_increase
                        disabled=font_at_max
                        aria-label=move || t("colorSwitcher.increaseFont")
                    >
                        "+"
                    </button>
                </div>
            </section>

            <button class="color-reset" id="color-reset" on:click=on_reset>
                {move || t("colorSwitcher.reset")}
            </button>
        </aside>
    }
}
