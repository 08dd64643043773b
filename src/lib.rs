//! Mckenzie Dev - single-page marketing site
//!
//! A static landing page for a small web studio, server-rendered with Leptos
//! and hydrated in the browser for the ambient motion effects.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
#[cfg(feature = "ssr")]
pub mod server;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
