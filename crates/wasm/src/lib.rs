#![deny(unsafe_code)]
//! WASM bindings for gl-sketches.
//!
//! Exposes two entry points to the page: `draw_sketch` renders one of the
//! static drawings into its canvas, and `start_point_exercise` wires mouse
//! and keyboard events to the interactive point. Browser-only modules are
//! compiled for `wasm32` targets; the helpers below are plain Rust so they
//! can be tested natively.

#[cfg(target_arch = "wasm32")]
mod bindings;
#[cfg(target_arch = "wasm32")]
mod logger;
#[cfg(target_arch = "wasm32")]
mod session;

#[cfg(target_arch = "wasm32")]
pub use bindings::{draw_sketch, start_point_exercise};

/// Canvas id of the point exercise on the exercise page.
pub const POINT_CANVAS_ID: &str = "glCanvasAtividade1";

/// The caller's canvas id, or `default` when none (or an empty one) is given.
pub fn canvas_id_or(requested: Option<String>, default: &str) -> String {
    requested
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Turns a `performance.now()` reading into a PRNG seed.
pub fn seed_from_millis(millis: f64) -> u64 {
    (millis.max(0.0) * 1000.0) as u64
}
