//! # breedlens
//!
//! Leptos + WASM single-page client for cattle and buffalo breed
//! recognition. The user uploads an image, it is posted to an external
//! classification service, and the predicted breed and confidence score
//! (or the failure) are rendered in place.
//!
//! This crate contains pages, components, application state, and the
//! HTTP client for the classification endpoint. The actual model
//! inference happens in the external service and is out of scope here.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
