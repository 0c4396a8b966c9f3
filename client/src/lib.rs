//! # client
//!
//! Leptos + WASM frontend for the MentorHub admin dashboard.
//!
//! This crate contains pages, components, the session context that wraps
//! `mentorhub::Session`, the static mock data behind the list pages, and the
//! browser implementations of the core's storage and timer seams.

pub mod app;
pub mod components;
pub mod data;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
