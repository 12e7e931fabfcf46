//! Earnest Admin Dashboard
//!
//! Browser front end for the Earnest HR/payroll system, built with Leptos
//! (WASM, client-side rendered). Every page is a thin view over the Earnest
//! REST API: it fetches JSON on mount, renders it, and forms post back and
//! trigger a refetch of the owning list.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
