//! # redtox-ui
//!
//! Leptos + WASM front end for browsing Reddit threads whose comments were
//! scored for toxicity. Flagged comments start behind a warning; viewers can
//! reveal them one at a time or all at once, and pick the toxicity threshold
//! the server should analyze with.
//!
//! The host server renders [`app::shell`] with a
//! [`state::thread::ThreadPayload`] provided as context. The `hydrate`
//! feature builds the browser entry point.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/console logging, then hydrate the body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = util::page_data::load_embedded()
        .map(|payload| payload.config.log_level)
        .unwrap_or_default();
    if let Err(e) = console_log::init_with_level(level.into()) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
