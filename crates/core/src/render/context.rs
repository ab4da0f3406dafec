//! GL context wrapper carrying the drawable size.

use crate::error::SketchError;

/// A `glow::Context` and the size of the surface it draws to.
///
/// Created once per canvas session.
pub struct GlContext {
    gl: glow::Context,
    width: u32,
    height: u32,
}

impl GlContext {
    /// Wraps `gl` and sets the viewport to cover `width` x `height`.
    ///
    /// # Errors
    ///
    /// Returns `SketchError::InvalidDimensions` if either dimension is zero.
    #[allow(unsafe_code)]
    pub fn new(gl: glow::Context, width: u32, height: u32) -> Result<Self, SketchError> {
        use glow::HasContext;

        if width == 0 || height == 0 {
            return Err(SketchError::InvalidDimensions);
        }

        // SAFETY: viewport takes plain integers on a live context.
        unsafe { gl.viewport(0, 0, width as i32, height as i32) };

        Ok(Self { gl, width, height })
    }

    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
