//! # wiki-client
//!
//! Leptos + WASM single-page client for the wiki service: route-based
//! navigation with a session-gating guard, per-domain state stores, and
//! thin HTTP wrappers around the remote API.
//!
//! Login happens on an external managed page that redirects back with a
//! one-time authorization code; the session itself is a server-side
//! cookie. This crate's core is reconciling that redirect flow with the
//! cookie session across page loads and navigations — see
//! `state::session` and `router::guard`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// WASM entry point for the browser build.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
