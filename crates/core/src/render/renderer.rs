//! GPU implementation of [`DrawTarget`].
//!
//! `GlRenderer` owns the context, one linked program, one vertex array and
//! a position/color buffer pair. Every pass overwrites the buffers with
//! `STATIC_DRAW` uploads; nothing is pooled or cached between passes.

use super::context::GlContext;
use super::program::SketchProgram;
use super::sources::COLOR_ATTRIBUTE;
use crate::color::Rgba;
use crate::error::SketchError;
use crate::scene::{Primitive, ProgramKind};
use crate::sequencer::{AttributeLayout, DrawTarget};
use crate::vertex::Vertex;

fn gl_mode(primitive: Primitive) -> u32 {
    match primitive {
        Primitive::Triangles => glow::TRIANGLES,
        Primitive::TriangleFan => glow::TRIANGLE_FAN,
        Primitive::Points => glow::POINTS,
    }
}

fn gl_count(n: usize) -> Result<i32, SketchError> {
    i32::try_from(n).map_err(|_| SketchError::Gpu(format!("vertex index {n} exceeds i32")))
}

/// Per-session GPU state for drawing scenes of one [`ProgramKind`].
pub struct GlRenderer {
    ctx: GlContext,
    program: SketchProgram,
    vertex_array: glow::VertexArray,
    position_buffer: glow::Buffer,
    color_buffer: glow::Buffer,
}

impl GlRenderer {
    /// The one setup routine every sketch goes through: build the program
    /// for `kind`, create the vertex array and buffers, and activate the
    /// program.
    ///
    /// # Errors
    ///
    /// Shader, binding, and object-creation failures are all returned; no
    /// partially built renderer is ever handed out.
    #[allow(unsafe_code)]
    pub fn new(ctx: GlContext, kind: ProgramKind) -> Result<Self, SketchError> {
        use glow::HasContext;

        let program = SketchProgram::new(ctx.gl(), kind)?;
        let gl = ctx.gl();

        // SAFETY: glow marks raw GL calls unsafe. Handles created here are
        // released on every failure path below.
        let objects = unsafe {
            gl.create_vertex_array().and_then(|vao| {
                gl.create_buffer()
                    .and_then(|pos| match gl.create_buffer() {
                        Ok(col) => Ok((pos, col)),
                        Err(e) => {
                            gl.delete_buffer(pos);
                            Err(e)
                        }
                    })
                    .map(|(pos, col)| (vao, pos, col))
                    .map_err(|e| {
                        gl.delete_vertex_array(vao);
                        e
                    })
            })
        };

        let (vertex_array, position_buffer, color_buffer) = match objects {
            Ok(objects) => objects,
            Err(e) => {
                program.destroy(gl);
                return Err(SketchError::Gpu(e));
            }
        };

        unsafe {
            gl.bind_vertex_array(Some(vertex_array));
            gl.use_program(Some(program.program()));
        }

        log::info!(
            "renderer ready: {:?} program on {}x{} surface",
            kind,
            ctx.width(),
            ctx.height()
        );

        Ok(Self {
            ctx,
            program,
            vertex_array,
            position_buffer,
            color_buffer,
        })
    }

    pub fn kind(&self) -> ProgramKind {
        self.program.kind()
    }

    /// Releases the program, vertex array and buffers, returning the context.
    #[allow(unsafe_code)]
    pub fn destroy(self) -> GlContext {
        use glow::HasContext;

        let gl = self.ctx.gl();
        self.program.destroy(gl);
        // SAFETY: all handles are live and owned by this renderer.
        unsafe {
            gl.delete_buffer(self.position_buffer);
            gl.delete_buffer(self.color_buffer);
            gl.delete_vertex_array(self.vertex_array);
        }
        self.ctx
    }

    #[allow(unsafe_code)]
    fn upload(&self, buffer: glow::Buffer, data: &[u8]) {
        use glow::HasContext;

        let gl = self.ctx.gl();
        // SAFETY: buffer is a live handle; data is a plain byte slice.
        unsafe {
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, data, glow::STATIC_DRAW);
        }
    }
}

impl DrawTarget for GlRenderer {
    fn program(&self) -> Option<ProgramKind> {
        Some(self.program.kind())
    }

    #[allow(unsafe_code)]
    fn clear(&mut self, color: Rgba) -> Result<(), SketchError> {
        use glow::HasContext;

        let gl = self.ctx.gl();
        // SAFETY: plain state calls on a live context.
        unsafe {
            gl.clear_color(color.r, color.g, color.b, color.a);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }
        Ok(())
    }

    fn upload_positions(&mut self, vertices: &[Vertex]) -> Result<(), SketchError> {
        self.upload(self.position_buffer, bytemuck::cast_slice(vertices));
        Ok(())
    }

    fn upload_colors(&mut self, colors: &[Rgba]) -> Result<(), SketchError> {
        if self.program.color_location().is_none() {
            return Err(SketchError::MissingBinding(COLOR_ATTRIBUTE.to_string()));
        }
        self.upload(self.color_buffer, bytemuck::cast_slice(colors));
        Ok(())
    }

    #[allow(unsafe_code)]
    fn set_layout(&mut self, layout: AttributeLayout) -> Result<(), SketchError> {
        use glow::HasContext;

        let gl = self.ctx.gl();
        let position = self.program.position_location();
        // SAFETY: locations were resolved from the active program and the
        // buffers are live. Offsets and strides describe tightly packed f32s.
        unsafe {
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.position_buffer));
            gl.enable_vertex_attrib_array(position);
            gl.vertex_attrib_pointer_f32(
                position,
                i32::from(layout.position_components),
                glow::FLOAT,
                false,
                0,
                0,
            );

            if let Some(color) = self.program.color_location() {
                match layout.color_components {
                    Some(components) => {
                        gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.color_buffer));
                        gl.enable_vertex_attrib_array(color);
                        gl.vertex_attrib_pointer_f32(
                            color,
                            i32::from(components),
                            glow::FLOAT,
                            false,
                            0,
                            0,
                        );
                    }
                    None => gl.disable_vertex_attrib_array(color),
                }
            }
        }
        log::debug!("attribute layout {layout:?}");
        Ok(())
    }

    #[allow(unsafe_code)]
    fn set_fill(&mut self, color: Rgba) -> Result<(), SketchError> {
        use glow::HasContext;

        if let Some(location) = self.program.fill_location() {
            // SAFETY: location belongs to the active program.
            unsafe {
                self.ctx
                    .gl()
                    .uniform_4_f32(Some(location), color.r, color.g, color.b, color.a)
            };
        }
        Ok(())
    }

    #[allow(unsafe_code)]
    fn set_point_size(&mut self, size: f32) -> Result<(), SketchError> {
        use glow::HasContext;

        if let Some(location) = self.program.point_size_location() {
            // SAFETY: location belongs to the active program.
            unsafe { self.ctx.gl().uniform_1_f32(Some(location), size) };
        }
        Ok(())
    }

    #[allow(unsafe_code)]
    fn draw(
        &mut self,
        primitive: Primitive,
        first: usize,
        count: usize,
    ) -> Result<(), SketchError> {
        use glow::HasContext;

        let (first, count) = (gl_count(first)?, gl_count(count)?);
        // SAFETY: the sequencer validated the range against the uploaded shape.
        unsafe { self.ctx.gl().draw_arrays(gl_mode(primitive), first, count) };
        Ok(())
    }
}
