//! # portfolio
//!
//! Leptos + WASM frontend for a single-page personal portfolio.
//!
//! This crate contains the page, the section components, the animation model
//! (easing, tweens, timelines, scroll-reveal triggers), the preloader
//! controller, the contact-form state, and the static section content. The
//! `server` crate renders it with SSR and hydrates it in the browser.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
