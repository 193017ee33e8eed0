//! # partner-browser
//!
//! Leptos + WASM frontend for browsing a paginated partner directory.
//! Fetches partner pages from the backend REST API, applies the optional
//! "has solutions" filter, and renders a card grid with pagination.
//!
//! This crate contains pages, components, the browse state machine, network
//! types, and the API fetch helpers. The backend itself is an external
//! collaborator; this crate is strictly the presentation layer.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client-side entry point invoked by the generated JS shim after the WASM
/// module loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
