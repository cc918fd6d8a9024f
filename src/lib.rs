//! Freightline - Logistics Marketing Site
//!
//! The marketing website for a pan-India freight and transport company,
//! built with Leptos and WebAssembly. Interactive pieces - theme switching,
//! the star-rating control and the locally persisted review list - live in
//! [`ui`], with their DOM-free logic under [`core`].

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
