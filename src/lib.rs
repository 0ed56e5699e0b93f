//! # meridian
//!
//! Leptos + WASM frontend for the Meridian workspace application.
//! Replaces the previous React client with a Rust-native UI layer.
//!
//! This crate contains pages, components, the session provider that owns
//! authentication state, and the REST helpers for the server's auth
//! endpoints. Rendering is SSR + hydration: the `ssr` feature exposes the
//! HTML shell for the server binary, the `hydrate` feature enables the
//! browser side.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;

/// Browser entry point: attach the client to server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
