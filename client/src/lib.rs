//! # client
//!
//! Leptos + WASM storefront: landing page, product catalog, product detail
//! view, and the shopping cart sidebar.
//!
//! This crate contains pages, components, landing sections, application
//! state, and the static catalog. It is rendered on the server by the
//! `server` crate (feature `ssr`) and hydrated in the browser (feature
//! `hydrate`).

pub mod app;
pub mod catalog;
pub mod components;
pub mod pages;
pub mod sections;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
