//! # client
//!
//! Leptos + WASM front end for the gym membership portal: login,
//! registration, and a session-gated dashboard talking to an external REST
//! API.
//!
//! Built with `hydrate` for the browser and `ssr` for the host binary.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
