//! # fomo-dashboard
//!
//! Leptos + WASM client for the FOMO tracker dashboard: theme persistence,
//! navigation highlighting, transient notifications, and a settings form kept
//! in sync with the server's `/settings/*` endpoints.
//!
//! The settings core (`settings`, `net`) is DOM-free and tested natively;
//! browser access is confined to `hydrate`-gated helpers.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod settings;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
