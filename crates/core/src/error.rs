//! Error types for the gl-sketches core.

use thiserror::Error;

use crate::scene::ProgramKind;

#[cfg(feature = "render")]
use crate::render::ShaderError;

/// Errors produced while building, validating, or drawing a scene.
#[derive(Debug, Error)]
pub enum SketchError {
    /// The rendering surface or its graphics context could not be obtained.
    #[error("rendering context unavailable: {0}")]
    ContextUnavailable(String),

    /// Canvas width or height was zero.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A requested sketch name is not registered.
    #[error("unknown sketch: {0}")]
    UnknownSketch(String),

    /// A draw call addressed vertices past the end of the uploaded shape.
    #[error("draw call {draw} reads vertices {first}..{end} but pass {pass} uploads only {available}")]
    VertexCountMismatch {
        pass: usize,
        draw: usize,
        first: usize,
        end: usize,
        available: usize,
    },

    /// A per-vertex color array did not match its vertex array.
    #[error("pass {pass} has {colors} colors for {vertices} vertices")]
    ColorCountMismatch {
        pass: usize,
        vertices: usize,
        colors: usize,
    },

    /// A scene was replayed on a target built for a different program.
    #[error("scene needs the {scene:?} program but the target runs {target:?}")]
    ProgramMismatch {
        scene: ProgramKind,
        target: ProgramKind,
    },

    /// A shader attribute or uniform could not be resolved by name.
    #[error("missing shader binding: {0}")]
    MissingBinding(String),

    /// The graphics driver refused to create an object.
    #[error("gpu error: {0}")]
    Gpu(String),

    /// An I/O error (snapshot write).
    #[error("I/O error: {0}")]
    Io(String),

    /// Shader compilation or program linking failed.
    #[cfg(feature = "render")]
    #[error(transparent)]
    Shader(#[from] ShaderError),
}
