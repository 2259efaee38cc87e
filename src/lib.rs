//! # tailboard
//!
//! Leptos + WASM frontend for the risk tails dashboard. The page submits
//! a file-processing request to the backend, then fetches and renders the
//! top/bottom tail grids and the DVaR trend chart.
//!
//! This crate contains pages, components, application state, the wire
//! types, and the REST helpers. The chart itself is drawn by the host
//! page's BokehJS via the `util::bokeh` bridge.

pub mod app;
pub mod components;
pub mod grid;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entrypoint: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
