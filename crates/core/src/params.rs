//! Lenient accessors for sketch parameters given as a JSON object.
//!
//! A missing key or a value of the wrong type falls back to the default;
//! these never fail.

use serde_json::Value;

/// Reads `params[name]` as `f32`, accepting any JSON number.
pub fn param_f32(params: &Value, name: &str, default: f32) -> f32 {
    params
        .get(name)
        .and_then(Value::as_f64)
        .map(|v| v as f32)
        .unwrap_or(default)
}

/// Reads `params[name]` as a non-negative integer.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}
