//! Radial placement for composite shapes (flower petals, pinwheel blades).
//!
//! Composite builders place `count` copies of a primitive at even angular
//! steps and concatenate the results in ascending index order. Draw
//! sequencing depends on that order: it slices the combined buffer back
//! into per-element draws by fixed strides.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::vertex::Vertex;

/// Vertices emitted by [`blade`].
pub const BLADE_VERTEX_COUNT: usize = 6;

/// Angles `2πi/count` for `i` in `[0, count)`, in radians.
pub fn radial_angles(count: usize) -> impl Iterator<Item = f32> {
    (0..count).map(move |i| TAU * i as f32 / count as f32)
}

/// One placement point per element, `radius` away from the origin at the
/// angles of [`radial_angles`].
pub fn radial_placements(count: usize, radius: f32) -> impl Iterator<Item = Vertex> {
    radial_angles(count).map(move |angle| Vertex::from(Vec2::from_angle(angle) * radius))
}

/// A rhombus-shaped pinwheel blade pointing along `angle_degrees`.
///
/// Two triangles share the hub and the tip; their third vertices sit
/// `width` away from the hub on either side, perpendicular to the blade.
pub fn blade(hub: Vertex, length: f32, width: f32, angle_degrees: f32) -> Vec<Vertex> {
    let hub_v = Vec2::from(hub);
    let dir = Vec2::from_angle(angle_degrees.to_radians());
    let side = dir.perp() * width;

    let tip = Vertex::from(hub_v + dir * length);
    let left = Vertex::from(hub_v + side);
    let right = Vertex::from(hub_v - side);
    vec![hub, tip, left, hub, tip, right]
}
