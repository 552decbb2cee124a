//! # myunity-web
//!
//! Leptos + WASM single-page client for the MyUnity account service.
//!
//! This crate contains the login/registration pages, the role-gated dashboard
//! and admin views, the session store backed by browser storage, and the
//! bearer-token API client that talks to the remote REST API.
//!
//! Browser-only code is gated by the `csr` feature; native builds (tests) get
//! inert storage and transport fallbacks so state and view logic stay testable.


pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    startup_step("console logger", console_log::init_with_level(log::Level::Debug));
    leptos::mount::mount_to_body(app::App);
}

/// Log a failed non-fatal start-up step and report whether it succeeded.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn startup_step<E: std::fmt::Display>(step: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            leptos::logging::warn!("{step} not installed: {e}");
            false
        }
    }
}
