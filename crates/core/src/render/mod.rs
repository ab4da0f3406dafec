//! WebGL2 / OpenGL rendering through glow.
//!
//! Only available with the `render` feature.
//!
//! - [`context`] -- the GL context plus the drawable size.
//! - [`shader`] -- compile-and-link helper and [`ShaderError`].
//! - [`sources`] -- GLSL for the uniform-color and vertex-color programs.
//! - [`program`] -- a linked program with its bindings resolved by name.
//! - [`renderer`] -- [`GlRenderer`], the GPU [`DrawTarget`](crate::DrawTarget).

pub mod context;
pub mod program;
pub mod renderer;
pub mod shader;
pub mod sources;

pub use context::GlContext;
pub use program::SketchProgram;
pub use renderer::GlRenderer;
pub use shader::{compile_program, compile_shader, format_shader_error, link_program, ShaderError, ShaderStage};
