//! # client
//!
//! Leptos + WASM frontend for the design-mode portfolio.
//!
//! The same content renders three ways (UI-focused, UX-focused, balanced).
//! One mode store is provided at the root; sections read it and look their
//! presentation up in a per-mode table. The contact form posts to the
//! server's `/api/contact`.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating portfolio");
    leptos::mount::hydrate_body(app::App);
}
