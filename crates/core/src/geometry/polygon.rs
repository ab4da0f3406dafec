//! Triangle-list builders for axis-aligned quads and single triangles.

use crate::vertex::Vertex;

/// Vertices emitted by [`quad`].
pub const QUAD_VERTEX_COUNT: usize = 6;

/// An axis-aligned rectangle as two triangles sharing the
/// top-left/bottom-right diagonal.
///
/// Vertex order: top-left, top-right, bottom-right, then bottom-left,
/// bottom-right, top-left.
pub fn quad(left: f32, top: f32, right: f32, bottom: f32) -> Vec<Vertex> {
    let tl = Vertex::new(left, top);
    let tr = Vertex::new(right, top);
    let br = Vertex::new(right, bottom);
    let bl = Vertex::new(left, bottom);
    vec![tl, tr, br, bl, br, tl]
}

pub fn triangle(a: Vertex, b: Vertex, c: Vertex) -> Vec<Vertex> {
    vec![a, b, c]
}
