//! # greensetu-client
//!
//! Leptos + WASM frontend for the GreenSetu landing page.
//!
//! This crate contains the page, its section components, the consultation
//! form state, and the network types shared with the server crate. With the
//! `ssr` feature it renders HTML on the server; with `hydrate` it attaches to
//! that HTML in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
