#![deny(unsafe_code)]
//! Sketch registry: maps sketch names to scene builders and provides CPU-side
//! rasterization and PNG snapshots.
//!
//! This crate sits between `gl-sketches-core` (scene model, sequencer, GPU
//! renderer) and the two front ends. Both the CLI and the WASM bindings go
//! through [`SketchKind`] so name dispatch lives in one place.

pub mod car;
pub mod flower;
pub mod pinwheel;
pub mod raster;
pub mod robot;

#[cfg(feature = "png")]
pub mod snapshot;

use gl_sketches_core::{Scene, SketchError};
use serde_json::{json, Value};

use flower::FlowerParams;
use pinwheel::PinwheelParams;

/// All static sketch names. The point exercise is interactive and lives in
/// `gl_sketches_core::point`.
const SKETCH_NAMES: &[&str] = &["car", "flower", "pinwheel", "robot"];

/// One of the static drawings, with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SketchKind {
    Car,
    Flower(FlowerParams),
    Pinwheel(PinwheelParams),
    Robot,
}

impl SketchKind {
    /// Constructs a sketch by name. Parameter fields missing from `params`
    /// fall back to the drawing's defaults; car and robot take none.
    ///
    /// Returns `SketchError::UnknownSketch` if the name is not recognized.
    pub fn from_name(name: &str, params: &Value) -> Result<Self, SketchError> {
        match name {
            "car" => Ok(SketchKind::Car),
            "flower" => Ok(SketchKind::Flower(FlowerParams::from_json(params))),
            "pinwheel" => Ok(SketchKind::Pinwheel(PinwheelParams::from_json(params))),
            "robot" => Ok(SketchKind::Robot),
            _ => Err(SketchError::UnknownSketch(name.to_string())),
        }
    }

    pub fn list_sketches() -> &'static [&'static str] {
        SKETCH_NAMES
    }

    pub fn name(&self) -> &'static str {
        match self {
            SketchKind::Car => "car",
            SketchKind::Flower(_) => "flower",
            SketchKind::Pinwheel(_) => "pinwheel",
            SketchKind::Robot => "robot",
        }
    }

    /// Id of the page canvas this sketch draws into by default.
    pub fn canvas_id(&self) -> &'static str {
        match self {
            SketchKind::Car => car::CANVAS_ID,
            SketchKind::Flower(_) => flower::CANVAS_ID,
            SketchKind::Pinwheel(_) => pinwheel::CANVAS_ID,
            SketchKind::Robot => robot::CANVAS_ID,
        }
    }

    pub fn scene(&self) -> Scene {
        match self {
            SketchKind::Car => car::scene(),
            SketchKind::Flower(p) => flower::scene(p),
            SketchKind::Pinwheel(p) => pinwheel::scene(p),
            SketchKind::Robot => robot::scene(),
        }
    }

    /// Current parameters as JSON (`{}` for parameterless sketches).
    pub fn params(&self) -> Value {
        match self {
            SketchKind::Flower(p) => p.to_json(),
            SketchKind::Pinwheel(p) => p.to_json(),
            SketchKind::Car | SketchKind::Robot => json!({}),
        }
    }
}
