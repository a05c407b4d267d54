//! # edulearn
//!
//! Leptos + WASM front end for the EduLearn learning-management site.
//!
//! The crate is organized around the authentication/session lifecycle:
//! `state::session_store` persists the bearer token, `services::auth` talks to
//! the identity endpoints, `state::auth` holds the process-wide auth context,
//! and `util::guard` decides what a route renders for the current auth state.
//! Pages and components are thin consumers of that core.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
