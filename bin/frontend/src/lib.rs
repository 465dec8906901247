//! TDRS web frontend.
//!
//! This crate provides the Leptos-based welcome screen for the TANF Data
//! Reporting System, rendered on the server and hydrated in the browser.

#![allow(non_snake_case)]

pub mod app;
pub mod components;
#[cfg(feature = "ssr")]
pub mod config;
pub mod navigator;
pub mod pages;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let target = navigator::login_target_from_document().unwrap_or_default();
    leptos::mount::hydrate_body(move || {
        provide_context(target);
        view! { <App/> }
    });
}
