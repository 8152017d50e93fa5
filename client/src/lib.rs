//! # tracker-ui
//!
//! Leptos + WASM frontend for the activity tracker.
//!
//! This crate holds the route table that maps browser paths to views, the
//! plugin registry installed at startup, the root `App` component, and the
//! route-level pages. The `server` crate renders it with the `ssr` feature;
//! the browser hydrates it with the `hydrate` feature.

pub mod app;
pub mod pages;
pub mod plugins;
pub mod routes;

/// WASM entry point: hydrate the server-rendered `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
