//! Fan tessellation of regular polygons and circles.
//!
//! A fan is one hub vertex followed by the boundary ring, with the first
//! boundary vertex repeated at the end so the last triangle closes the loop.
//! The output only makes sense under triangle-fan assembly.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::color::Rgba;
use crate::scene::Shape;
use crate::vertex::Vertex;

/// Number of vertices [`fan`] emits for `sides` boundary segments.
pub const fn fan_vertex_count(sides: usize) -> usize {
    sides + 2
}

/// Tessellates a regular `sides`-gon of the given `radius` around `center`.
///
/// Emits the center, then boundary vertices at angles `2πi/sides` for
/// `i` in `[0, sides)`, then the first boundary vertex again. The result
/// always has `sides + 2` vertices.
///
/// `sides < 3` is not rejected: the fan silently degenerates (a line or a
/// point), the same way a GPU would draw it.
pub fn fan(center: Vertex, radius: f32, sides: usize) -> Vec<Vertex> {
    let hub = Vec2::from(center);
    let at = |angle: f32| Vertex::from(hub + Vec2::from_angle(angle) * radius);

    let mut vertices = Vec::with_capacity(fan_vertex_count(sides));
    vertices.push(center);
    vertices.extend((0..sides).map(|i| at(TAU * i as f32 / sides as f32)));

    let closing = vertices.get(1).copied().unwrap_or_else(|| at(0.0));
    vertices.push(closing);
    vertices
}

/// A [`fan`] with per-vertex colors: `hub_color` on the center vertex and
/// `rim_color` on every boundary vertex, so the rasterizer blends a radial
/// gradient.
pub fn colored_fan(
    center: Vertex,
    radius: f32,
    sides: usize,
    hub_color: Rgba,
    rim_color: Rgba,
) -> Shape {
    let vertices = fan(center, radius, sides);
    let colors = std::iter::once(hub_color)
        .chain(std::iter::repeat(rim_color))
        .take(vertices.len())
        .collect();
    Shape::with_colors(vertices, colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vertex, b: Vertex) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    #[test]
    fn square_fan_hits_axis_points() {
        let v = fan(Vertex::ORIGIN, 1.0, 4);
        assert_eq!(v.len(), 6);
        assert_eq!(v[0], Vertex::ORIGIN);
        assert!(close(v[1], Vertex::new(1.0, 0.0)), "got {:?}", v[1]);
        assert!(close(v[2], Vertex::new(0.0, 1.0)), "got {:?}", v[2]);
        assert!(close(v[3], Vertex::new(-1.0, 0.0)), "got {:?}", v[3]);
        assert!(close(v[4], Vertex::new(0.0, -1.0)), "got {:?}", v[4]);
        assert_eq!(v[5], v[1]);
    }

    #[test]
    fn wheel_fan_has_twenty_vertices() {
        let v = fan(Vertex::new(-0.4, -0.7), 0.15, 18);
        assert_eq!(v.len(), 20);
        assert!(close(v[1], Vertex::new(-0.25, -0.7)), "got {:?}", v[1]);
    }

    #[test]
    fn degenerate_side_counts_keep_length_contract() {
        for sides in 0..3 {
            let v = fan(Vertex::ORIGIN, 0.5, sides);
            assert_eq!(v.len(), sides + 2, "sides = {sides}");
        }
    }

    #[test]
    fn colored_fan_puts_hub_color_first() {
        let shape = colored_fan(Vertex::ORIGIN, 0.3, 60, Rgba::WHITE, Rgba::YELLOW);
        let colors = shape.colors.as_ref().expect("per-vertex colors");
        assert_eq!(colors.len(), 62);
        assert_eq!(colors[0], Rgba::WHITE);
        assert!(colors[1..].iter().all(|&c| c == Rgba::YELLOW));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn fan_has_n_plus_two_vertices_and_closes(
                sides in 3_usize..512,
                cx in -1.0_f32..1.0,
                cy in -1.0_f32..1.0,
                radius in 0.0_f32..2.0,
            ) {
                let center = Vertex::new(cx, cy);
                let v = fan(center, radius, sides);
                prop_assert_eq!(v.len(), sides + 2);
                prop_assert_eq!(v[0], center);
                prop_assert_eq!(v[sides + 1], v[1]);
            }

            #[test]
            fn boundary_vertices_lie_on_the_circle(
                sides in 3_usize..128,
                radius in 0.01_f32..1.0,
            ) {
                let v = fan(Vertex::new(0.2, -0.1), radius, sides);
                for p in &v[1..] {
                    let d = Vec2::new(p.x - 0.2, p.y + 0.1).length();
                    prop_assert!((d - radius).abs() < 1e-4, "distance {d} vs radius {radius}");
                }
            }
        }
    }
}
