//! # site
//!
//! Leptos + WASM frontend for the portfolio page.
//!
//! This crate contains the page, its components, reactive state, and the
//! browser glue (storage, DOM writes, locale fetching). All color, theme,
//! language, carousel, and scroll logic lives in the `appearance` crate
//! and is driven from here.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::trace!("logger was already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
