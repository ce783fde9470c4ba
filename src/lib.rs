//! # parlor-client
//!
//! Leptos + WASM frontend for the Parlor account flows: a registration page
//! with schema-validated fields and a sign-in page it navigates back to.
//!
//! The form core (`form`) is framework-free: schema validation, the field
//! error mapping, the submit decision, and the focus chain are plain types
//! and functions exercised by unit tests without a browser.

pub mod app;
pub mod components;
pub mod form;
pub mod net;
pub mod pages;
pub mod util;

/// Browser entry point: installs panic + log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
