//! # jobportal
//!
//! Leptos + WASM frontend for the job portal: public job browsing,
//! email/password sign-in, and role-specific dashboards for job seekers,
//! recruiters, and admins.
//!
//! This crate contains pages, components, application state, network types,
//! and the pure helpers (listing filter, route guard, job form validation)
//! the views are built on. The `server` crate hosts it with SSR.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
