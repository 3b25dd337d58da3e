//! # ipce-web
//!
//! Leptos + WASM frontend for the IPCE building-management landing site.
//!
//! This crate contains the landing page, its components, client state, and
//! the REST helpers for the remote user API. The `ssr` feature renders it
//! inside `ipce-server`; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
