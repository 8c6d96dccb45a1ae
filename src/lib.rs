//! # signup-client
//!
//! Leptos + WASM frontend for account sign-up.
//!
//! This crate contains the sign-up form state machine, a presence-only route
//! guard, the authentication collaborator it talks to, and the pages and
//! components that render them. The server binary in `main.rs` hosts the same
//! app with SSR.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
