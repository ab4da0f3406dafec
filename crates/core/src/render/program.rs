//! A linked sketch program with attribute and uniform locations resolved.

use super::shader::compile_program;
use super::sources::{COLOR_ATTRIBUTE, COLOR_UNIFORM, POINT_SIZE_UNIFORM, POSITION_ATTRIBUTE};
use crate::error::SketchError;
use crate::scene::ProgramKind;

/// Program handle plus the binding locations its [`ProgramKind`] needs.
///
/// Every location the kind requires is resolved at construction, so a
/// missing binding fails setup instead of silently drawing nothing.
pub struct SketchProgram {
    kind: ProgramKind,
    program: glow::Program,
    position: u32,
    color: Option<u32>,
    fill: Option<glow::UniformLocation>,
    point_size: Option<glow::UniformLocation>,
}

impl SketchProgram {
    /// Compiles, links, and resolves bindings for `kind`.
    ///
    /// # Errors
    ///
    /// Returns `SketchError::Shader` on compile/link failure and
    /// `SketchError::MissingBinding` if a required name is not active.
    #[allow(unsafe_code)]
    pub fn new(gl: &glow::Context, kind: ProgramKind) -> Result<Self, SketchError> {
        use glow::HasContext;

        let (vertex_src, fragment_src) = kind.sources();
        let program = compile_program(gl, vertex_src, fragment_src)?;

        // SAFETY: program is a freshly linked handle; lookups are read-only.
        let resolved = unsafe {
            let attrib = |name: &str| {
                gl.get_attrib_location(program, name)
                    .ok_or_else(|| SketchError::MissingBinding(name.to_string()))
            };
            let uniform = |name: &str| {
                gl.get_uniform_location(program, name)
                    .ok_or_else(|| SketchError::MissingBinding(name.to_string()))
            };

            match kind {
                ProgramKind::UniformColor => attrib(POSITION_ATTRIBUTE).and_then(|position| {
                    Ok((
                        position,
                        None,
                        Some(uniform(COLOR_UNIFORM)?),
                        Some(uniform(POINT_SIZE_UNIFORM)?),
                    ))
                }),
                ProgramKind::VertexColor => attrib(POSITION_ATTRIBUTE).and_then(|position| {
                    Ok((position, Some(attrib(COLOR_ATTRIBUTE)?), None, None))
                }),
            }
        };

        match resolved {
            Ok((position, color, fill, point_size)) => Ok(Self {
                kind,
                program,
                position,
                color,
                fill,
                point_size,
            }),
            Err(e) => {
                // SAFETY: program is live and not yet in use.
                unsafe { gl.delete_program(program) };
                Err(e)
            }
        }
    }

    pub fn kind(&self) -> ProgramKind {
        self.kind
    }

    pub fn program(&self) -> glow::Program {
        self.program
    }

    pub fn position_location(&self) -> u32 {
        self.position
    }

    pub fn color_location(&self) -> Option<u32> {
        self.color
    }

    pub fn fill_location(&self) -> Option<&glow::UniformLocation> {
        self.fill.as_ref()
    }

    pub fn point_size_location(&self) -> Option<&glow::UniformLocation> {
        self.point_size.as_ref()
    }

    #[allow(unsafe_code)]
    pub fn destroy(&self, gl: &glow::Context) {
        use glow::HasContext;

        // SAFETY: self.program is a live handle from new().
        unsafe { gl.delete_program(self.program) };
    }
}
