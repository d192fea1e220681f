//! # cart-view
//!
//! Leptos + WASM shopping cart view.
//!
//! The cart is owned by a reactive store (`state::store`) and rendered by
//! `components::cart_view::CartView`, which reads immutable snapshots and
//! turns button presses into typed `CartAction` dispatches. Pricing rules
//! live in `util::price`; the host supplies display settings through
//! `config::CartViewConfig`.
//!
//! Build with the `csr` feature for the browser and call [`mount`] or
//! [`mount_with_config`] from the page.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Mount the app on `<body>` with default settings.
#[cfg(feature = "csr")]
#[wasm_bindgen]
pub fn mount() {
    mount_with(config::CartViewConfig::default());
}

/// Mount the app on `<body>` with settings parsed from a JSON object.
/// Invalid JSON is logged and the defaults are used.
#[cfg(feature = "csr")]
#[wasm_bindgen]
pub fn mount_with_config(json: &str) {
    let config = config::CartViewConfig::from_json(json).unwrap_or_else(|err| {
        leptos::logging::error!("{err}; using default settings");
        config::CartViewConfig::default()
    });
    mount_with(config);
}

#[cfg(feature = "csr")]
fn mount_with(config: config::CartViewConfig) {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    // Fails when a logger is already installed, e.g. on a second mount.
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::log!("console logger not installed: {err}");
    }
    log::info!("mounting cart view");

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
