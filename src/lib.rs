//! # campus-admin
//!
//! Leptos front-end for the academic administration panel: instructors
//! (formateurs), students (étudiants), cohorts (promotions) and teaching
//! spaces (espaces pédagogiques), plus a dashboard and the sidebar shell.
//!
//! The crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). Every screen reads and mutates records through the external
//! REST backend described in [`net::api`].

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("campus-admin hydrating");
    leptos::mount::hydrate_body(app::App);
}
