//! Pantry Tracker UI
//!
//! Browser front end for the pantry API, built with Leptos (WASM).
//!
//! # Features
//!
//! - Dashboard of pantry stats and ingredients expiring this week
//! - Ingredient management with add, edit and delete
//! - Recipe suggestions for ingredients that are about to spoil
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Page state lives in the `pantry` crate's view state machines,
//! held in reactive signals; this crate renders them and performs requests
//! with gloo-net.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
