//! # bloodbank
//!
//! Leptos + WASM client for the blood donation coordination service.
//!
//! Accounts register and sign in, keep a donor profile, post and accept blood
//! requests, and follow each donation through confirm/cancel. The server owns
//! every record; this crate holds the session, the authenticated REST client
//! and per-page view-models. Shared wire types and rules live in `records`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: logging, panic hook, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
