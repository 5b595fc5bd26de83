//! # portfolio
//!
//! WASM interactivity layer for the static portfolio page.
//!
//! The page markup is rendered ahead of time; this crate attaches behavior to
//! it once the DOM is parsed: theme preference, mobile drawer, typed-text
//! headline, reveal and skill-bar animations, section navigation, back-to-top
//! and the contact form acknowledgement.
//!
//! SYSTEM CONTEXT
//! ==============
//! `state` holds the pure, natively testable models. `controllers` binds those
//! models to DOM events and is compiled only with the `hydrate` feature, as is
//! every `web-sys` call in `util`.

pub mod config;
#[cfg(feature = "hydrate")]
pub mod controllers;
pub mod error;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

/// WASM entry point.
///
/// Installs the panic hook and console logger, then runs the page controller
/// on `DOMContentLoaded` (or immediately when parsing already finished).
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    if let Err(e) = controllers::page::start_when_ready() {
        log::warn!("portfolio init failed: {e}");
    }
}
