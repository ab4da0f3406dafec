//! CPU rasterizer implementing [`DrawTarget`].
//!
//! Lets scenes render without a GPU (CLI snapshots, tests). Follows the GL
//! conventions the shaders rely on: device coordinates map to the full
//! surface with y up, pixel centers are sampled at `+0.5`, per-vertex colors
//! are interpolated barycentrically, points are axis-aligned squares, and
//! there is no blending (later draws overwrite earlier ones).
//!
//! The pixel buffer is RGBA8, `width * height * 4` bytes, row 0 at the top.

use gl_sketches_core::sequencer::{AttributeLayout, DrawTarget};
use gl_sketches_core::{Primitive, Rgba, Scene, SketchError, Vertex};

/// Largest accepted width or height, in pixels.
pub const MAX_DIMENSION: u32 = 8192;

/// Software render surface.
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    positions: Vec<Vertex>,
    colors: Vec<Rgba>,
    layout: AttributeLayout,
    fill: Rgba,
    point_size: f32,
}

impl Raster {
    /// A transparent black surface.
    ///
    /// # Errors
    ///
    /// Returns `SketchError::InvalidDimensions` if either dimension is zero
    /// or above [`MAX_DIMENSION`].
    pub fn new(width: u32, height: u32) -> Result<Self, SketchError> {
        let valid = 1..=MAX_DIMENSION;
        if !valid.contains(&width) || !valid.contains(&height) {
            return Err(SketchError::InvalidDimensions);
        }
        let len = width as usize * height as usize * 4;
        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
            positions: Vec::new(),
            colors: Vec::new(),
            layout: AttributeLayout::POSITION_ONLY,
            fill: Rgba::BLACK,
            point_size: 1.0,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA8 bytes, row-major from the top-left corner.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// The pixel at column `x`, row `y` (row 0 at the top).
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixels[i..i + 4]);
        Some(px)
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    fn put(&mut self, x: u32, y: u32, color: Rgba) {
        let i = self.offset(x, y);
        self.pixels[i..i + 4].copy_from_slice(&color.to_rgba8());
    }

    /// Device coordinates to continuous pixel coordinates.
    fn to_screen(&self, v: Vertex) -> (f32, f32) {
        let x = (v.x + 1.0) * 0.5 * self.width as f32;
        let y = (1.0 - v.y) * 0.5 * self.height as f32;
        (x, y)
    }

    fn vertex_color(&self, index: usize) -> Rgba {
        match self.layout.color_components {
            Some(_) => self.colors.get(index).copied().unwrap_or(Rgba::TRANSPARENT),
            None => self.fill,
        }
    }

    /// Pixel index range covering `[lo, hi)` in continuous coordinates,
    /// clamped to `[0, limit)`.
    fn span(lo: f32, hi: f32, limit: u32) -> std::ops::Range<u32> {
        let start = (lo - 0.5).ceil().max(0.0) as u32;
        let end = ((hi - 0.5).floor() + 1.0).clamp(0.0, limit as f32) as u32;
        start.min(end)..end
    }

    fn triangle(&mut self, indices: [usize; 3]) {
        let [a, b, c] = indices.map(|i| self.to_screen(self.positions[i]));
        let colors = indices.map(|i| self.vertex_color(i));

        let edge = |p: (f32, f32), q: (f32, f32), r: (f32, f32)| {
            (q.0 - p.0) * (r.1 - p.1) - (q.1 - p.1) * (r.0 - p.0)
        };
        let area = edge(a, b, c);
        if area == 0.0 {
            return;
        }

        let xs = Self::span(a.0.min(b.0).min(c.0), a.0.max(b.0).max(c.0), self.width);
        let ys = Self::span(a.1.min(b.1).min(c.1), a.1.max(b.1).max(c.1), self.height);
        for y in ys {
            for x in xs.clone() {
                let p = (x as f32 + 0.5, y as f32 + 0.5);
                let w = [edge(b, c, p) / area, edge(c, a, p) / area, edge(a, b, p) / area];
                if w.iter().all(|&wi| wi >= 0.0) {
                    self.put(x, y, Rgba::blend3(colors, w));
                }
            }
        }
    }

    fn point(&mut self, index: usize) {
        let (cx, cy) = self.to_screen(self.positions[index]);
        let half = self.point_size / 2.0;
        let color = self.vertex_color(index);
        let xs = Self::span(cx - half, cx + half, self.width);
        for y in Self::span(cy - half, cy + half, self.height) {
            for x in xs.clone() {
                self.put(x, y, color);
            }
        }
    }
}

impl DrawTarget for Raster {
    fn clear(&mut self, color: Rgba) -> Result<(), SketchError> {
        let rgba = color.to_rgba8();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
        Ok(())
    }

    fn upload_positions(&mut self, vertices: &[Vertex]) -> Result<(), SketchError> {
        self.positions.clear();
        self.positions.extend_from_slice(vertices);
        Ok(())
    }

    fn upload_colors(&mut self, colors: &[Rgba]) -> Result<(), SketchError> {
        self.colors.clear();
        self.colors.extend_from_slice(colors);
        Ok(())
    }

    fn set_layout(&mut self, layout: AttributeLayout) -> Result<(), SketchError> {
        self.layout = layout;
        Ok(())
    }

    fn set_fill(&mut self, color: Rgba) -> Result<(), SketchError> {
        self.fill = color;
        Ok(())
    }

    fn set_point_size(&mut self, size: f32) -> Result<(), SketchError> {
        self.point_size = size;
        Ok(())
    }

    fn draw(
        &mut self,
        primitive: Primitive,
        first: usize,
        count: usize,
    ) -> Result<(), SketchError> {
        let end = first + count;
        if end > self.positions.len() {
            return Err(SketchError::VertexCountMismatch {
                pass: 0,
                draw: 0,
                first,
                end,
                available: self.positions.len(),
            });
        }

        match primitive {
            Primitive::Triangles => {
                for i in (first..end).step_by(3).filter(|&i| i + 3 <= end) {
                    self.triangle([i, i + 1, i + 2]);
                }
            }
            Primitive::TriangleFan => {
                for i in (first + 1)..end.saturating_sub(1) {
                    self.triangle([first, i, i + 1]);
                }
            }
            Primitive::Points => {
                for i in first..end {
                    self.point(i);
                }
            }
        }
        Ok(())
    }
}

/// Rasterizes `scene` onto a fresh `width` x `height` surface.
///
/// # Errors
///
/// Returns `SketchError::InvalidDimensions` for an empty surface, or the
/// scene's validation error.
pub fn render_scene(scene: &Scene, width: u32, height: u32) -> Result<Raster, SketchError> {
    let mut raster = Raster::new(width, height)?;
    gl_sketches_core::sequencer::run(scene, &mut raster)?;
    log::debug!("rasterized '{}' at {width}x{height}", scene.name);
    Ok(raster)
}
