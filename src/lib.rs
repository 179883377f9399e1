//! BlogGen.ai - YouTube to blog article web client
//!
//! Generate, edit and export blog articles from YouTube videos,
//! built with Leptos and WebAssembly.

#![recursion_limit = "1024"]

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
