//! # career-ready
//!
//! Leptos + WASM front-end shell for the CareerReady AI web application.
//!
//! This crate contains the route definitions, the authentication session
//! store, and a thin REST wrapper around the remote accounts service. The
//! session lifecycle in [`state::session`] is the one piece with real
//! state; everything else is presentation around it.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entrypoint: wire up logging, then hydrate the server-rendered
/// shell into the live application.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
