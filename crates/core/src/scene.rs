//! Scene data model: shapes, passes, and draw calls.
//!
//! A [`Scene`] is an ordered list of [`Pass`]es. Each pass uploads one
//! [`Shape`] into the shared vertex buffer(s), overwriting whatever the
//! previous pass left there, and then issues one or more [`DrawCall`]s that
//! slice the uploaded vertices. Scenes are plain data: they are built by
//! pure functions and replayed by [`crate::sequencer::run`].

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::SketchError;
use crate::vertex::Vertex;

/// Primitive assembly mode for a draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    /// Independent triangles, three vertices each.
    Triangles,
    /// Triangles sharing the first vertex of the range.
    TriangleFan,
    /// One square point per vertex.
    Points,
}

/// Which shader program a scene needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramKind {
    /// Position attribute plus `u_color` / `u_point_size` uniforms.
    UniformColor,
    /// Position and color attributes; the color is interpolated per fragment.
    VertexColor,
}

/// One shape descriptor: positions, optional per-vertex colors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Shape {
    pub vertices: Vec<Vertex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<Rgba>>,
}

impl Shape {
    /// A shape without per-vertex colors (drawn with a uniform fill).
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self {
            vertices,
            colors: None,
        }
    }

    pub fn with_colors(vertices: Vec<Vertex>, colors: Vec<Rgba>) -> Self {
        Self {
            vertices,
            colors: Some(colors),
        }
    }

    /// A per-vertex colored shape where every vertex has the same color.
    pub fn solid(vertices: Vec<Vertex>, color: Rgba) -> Self {
        let colors = vec![color; vertices.len()];
        Self::with_colors(vertices, colors)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Appends another shape. Both must agree on whether they carry colors;
    /// a colorless shape appended to a colored one is filled with `TRANSPARENT`.
    pub fn extend(&mut self, other: Shape) {
        let before = self.vertices.len();
        self.vertices.extend(other.vertices);
        let total = self.vertices.len();
        self.colors = match (self.colors.take(), other.colors) {
            (Some(mut mine), Some(theirs)) => {
                mine.extend(theirs);
                Some(mine)
            }
            (Some(mut mine), None) => {
                mine.resize(total, Rgba::TRANSPARENT);
                Some(mine)
            }
            (None, Some(theirs)) => {
                let mut colors = vec![Rgba::TRANSPARENT; before];
                colors.extend(theirs);
                Some(colors)
            }
            (None, None) => None,
        };
    }

    /// Positions flattened to `[x, y, ...]`.
    pub fn position_data(&self) -> &[f32] {
        crate::vertex::flatten(&self.vertices)
    }

    /// Colors flattened to `[r, g, b, a, ...]`, if present.
    pub fn color_data(&self) -> Option<&[f32]> {
        self.colors.as_deref().map(bytemuck::cast_slice::<Rgba, f32>)
    }
}

/// A single draw command over a run of the current pass's vertices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawCall {
    pub primitive: Primitive,
    pub first: usize,
    pub count: usize,
    /// Uniform fill color set before drawing (uniform-color programs).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Rgba>,
    /// Point size in pixels set before drawing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_size: Option<f32>,
}

impl DrawCall {
    pub fn new(primitive: Primitive, first: usize, count: usize) -> Self {
        Self {
            primitive,
            first,
            count,
            fill: None,
            point_size: None,
        }
    }

    pub fn fill(mut self, color: Rgba) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn point_size(mut self, size: f32) -> Self {
        self.point_size = Some(size);
        self
    }

    /// One past the last vertex this call reads.
    pub fn end(&self) -> usize {
        self.first + self.count
    }
}

/// One upload followed by the draws that read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pass {
    pub label: String,
    pub shape: Shape,
    pub draws: Vec<DrawCall>,
}

impl Pass {
    pub fn new(label: impl Into<String>, shape: Shape) -> Self {
        Self {
            label: label.into(),
            shape,
            draws: Vec::new(),
        }
    }

    /// A pass with a single draw covering every uploaded vertex.
    pub fn single(label: impl Into<String>, shape: Shape, primitive: Primitive) -> Self {
        let count = shape.vertex_count();
        Self::new(label, shape).draw(DrawCall::new(primitive, 0, count))
    }

    /// A pass with a single uniform-filled draw covering every vertex.
    pub fn filled(label: impl Into<String>, shape: Shape, primitive: Primitive, fill: Rgba) -> Self {
        let count = shape.vertex_count();
        Self::new(label, shape).draw(DrawCall::new(primitive, 0, count).fill(fill))
    }

    pub fn draw(mut self, call: DrawCall) -> Self {
        self.draws.push(call);
        self
    }
}

/// A complete picture: what to clear with, which program to use, and the
/// passes to replay in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub name: String,
    pub program: ProgramKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clear_color: Option<Rgba>,
    pub passes: Vec<Pass>,
}

impl Scene {
    pub fn new(name: impl Into<String>, program: ProgramKind) -> Self {
        Self {
            name: name.into(),
            program,
            clear_color: None,
            passes: Vec::new(),
        }
    }

    pub fn clear(mut self, color: Rgba) -> Self {
        self.clear_color = Some(color);
        self
    }

    pub fn pass(mut self, pass: Pass) -> Self {
        self.passes.push(pass);
        self
    }

    /// Total number of draw calls across all passes.
    pub fn draw_count(&self) -> usize {
        self.passes.iter().map(|p| p.draws.len()).sum()
    }

    /// Checks that every draw call stays inside its pass's vertices and that
    /// per-vertex colors match the vertex count.
    ///
    /// Returns the first violation found, in pass order.
    pub fn validate(&self) -> Result<(), SketchError> {
        for (pass_index, pass) in self.passes.iter().enumerate() {
            let available = pass.shape.vertex_count();
            if let Some(colors) = &pass.shape.colors {
                if colors.len() != available {
                    return Err(SketchError::ColorCountMismatch {
                        pass: pass_index,
                        vertices: available,
                        colors: colors.len(),
                    });
                }
            }
            for (draw_index, draw) in pass.draws.iter().enumerate() {
                if draw.end() > available {
                    return Err(SketchError::VertexCountMismatch {
                        pass: pass_index,
                        draw: draw_index,
                        first: draw.first,
                        end: draw.end(),
                        available,
                    });
                }
            }
        }
        Ok(())
    }
}
