//! Careboard
//!
//! Patient vitals dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Selectable patient roster fetched from the records endpoint
//! - Detail panel with demographics, vitals and diagnosis table
//! - Blood-pressure trend chart over the last six periods
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It performs a single authenticated HTTP fetch at startup and
//! renders everything else synchronously from in-memory state.

use leptos::*;

mod api;
mod app;
mod components;
mod config;
mod model;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
