//! Leptos frontend for the Blueprint console.
//!
//! The DOM bindings only exist for `wasm32` with the `web` feature. Every other
//! build compiles just [`ui_model`], so `cargo test` at the workspace root runs
//! natively.

pub mod ui_model;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
