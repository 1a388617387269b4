//! Oxígeno registration page
//!
//! Server-rendered public registration form for the Oxígeno movement,
//! hydrated in the browser, with the registration and catalog API it posts to.
//! Built with Leptos and axum.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
