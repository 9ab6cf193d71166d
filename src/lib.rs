//! # catalyst-client
//!
//! Leptos + WASM frontend for the Career Catalyst learning platform.
//! Replaces the React client with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, the REST
//! client, and the local-first persistence core: a per-user namespaced
//! store over localStorage (`storage`) and a same-tab change notifier
//! (`notify`) that keeps independently mounted views in sync without a
//! network round trip.

pub mod app;
pub mod components;
pub mod net;
pub mod notify;
pub mod pages;
pub mod state;
pub mod storage;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
