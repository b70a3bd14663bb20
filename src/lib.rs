//! # kalaa-setu
//!
//! Leptos + WASM client for the Kalaa Setu artist-booking marketplace.
//!
//! All data lives behind the marketplace REST API. This crate wires the
//! `session` crate's store and route guard into the browser: `localStorage`
//! for the bearer token, `gloo-net` for the identity endpoint, and the Leptos
//! router for redirects.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
