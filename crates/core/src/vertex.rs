//! 2D vertex in normalized device coordinates.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A position in normalized device space, conventionally [-1, 1] on both axes.
///
/// `#[repr(C)]` and `Pod` so a vertex slice uploads as a tightly packed
/// 2-component float attribute.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
}

impl Vertex {
    pub const ORIGIN: Vertex = Vertex::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for Vertex {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vertex> for Vec2 {
    fn from(v: Vertex) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<[f32; 2]> for Vertex {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vertex> for [f32; 2] {
    fn from(v: Vertex) -> Self {
        [v.x, v.y]
    }
}

/// Converts a hand-authored `[x, y]` table into vertices.
pub fn from_pairs(pairs: &[[f32; 2]]) -> Vec<Vertex> {
    pairs.iter().copied().map(Vertex::from).collect()
}

/// Flattens vertices to `[x0, y0, x1, y1, ...]`.
pub fn flatten(vertices: &[Vertex]) -> &[f32] {
    bytemuck::cast_slice(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_interleaves_coordinates() {
        let v = [Vertex::new(0.1, 0.2), Vertex::new(-0.3, 0.4)];
        assert_eq!(flatten(&v), &[0.1, 0.2, -0.3, 0.4]);
    }

    #[test]
    fn from_pairs_preserves_order() {
        let v = from_pairs(&[[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(v, vec![Vertex::new(1.0, 2.0), Vertex::new(3.0, 4.0)]);
    }

    #[test]
    fn glam_conversion_round_trips() {
        let v = Vertex::new(0.25, -0.75);
        let g: Vec2 = v.into();
        assert_eq!(Vertex::from(g), v);
    }
}
