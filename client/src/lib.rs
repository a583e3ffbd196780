//! # client
//!
//! Leptos + WASM frontend for the EduMentor tutoring dashboard.
//!
//! The crate holds the pages, the layout shell, the session service that
//! backs sign-in, and the key-value persistence it writes through to. It is
//! compiled with `hydrate` for the browser bundle and with `ssr` when linked
//! into the host server.

pub mod app;
pub mod components;
pub mod pages;
pub mod routes;
pub mod services;
pub mod state;
pub mod types;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
