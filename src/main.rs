//! Trading Agent Dashboard
//!
//! Read-only dashboard for an automated trading agent, built with Leptos (WASM).
//!
//! # Features
//!
//! - Portfolio overview with allocation and performance charts
//! - Judgment history (decision records with confidence and rationale)
//! - Transaction history with before/after allocation snapshots
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the trading agent's REST API over HTTP
//! and never mutates backend state; every entity it touches is an immutable
//! snapshot produced elsewhere.

use leptos::*;

mod api;
mod app;
mod components;
mod format;
mod model;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
