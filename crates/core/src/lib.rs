#![deny(unsafe_code)]
//! Core types for the gl-sketches rendering exercises.
//!
//! Provides `Vertex`/`Rgba` records, pure geometry builders (fan
//! tessellation, quads, radial layouts, pinwheel blades), the `Scene` data
//! model, the `DrawTarget` trait with the draw sequencer that replays scenes,
//! the interactive `PointExercise`, and (behind the `render` feature) the
//! glow-backed `GlRenderer`.

pub mod color;
pub mod error;
pub mod geometry;
pub mod params;
pub mod point;
pub mod prng;
pub mod scene;
pub mod sequencer;
pub mod vertex;

#[cfg(feature = "render")]
pub mod render;

pub use color::Rgba;
pub use error::SketchError;
pub use point::PointExercise;
pub use prng::Xorshift64;
pub use scene::{DrawCall, Pass, Primitive, ProgramKind, Scene, Shape};
pub use sequencer::{AttributeLayout, DrawTarget};
pub use vertex::Vertex;
