//! DataWise - marketing site for an enterprise analytics platform
//!
//! Server-rendered with Leptos and hydrated in the browser. The interactive
//! state (demo wizard, rotating testimonials, animated counters, tab
//! selection) lives in [`core`] and is independent of the DOM.

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
