//! Pinwheel: colored rhombus blades around a hub, on a brown shaft.
//!
//! Blades and shaft share one buffer and a single triangle-list draw.

use gl_sketches_core::geometry::{blade, quad, BLADE_VERTEX_COUNT, QUAD_VERTEX_COUNT};
use gl_sketches_core::params::{param_f32, param_usize};
use gl_sketches_core::{Pass, Primitive, ProgramKind, Rgba, Scene, Shape, Vertex};
use serde_json::{json, Value};

pub const CANVAS_ID: &str = "glCanvasPinwheel";

/// Blade colors, cycled when there are more than four blades.
pub const BLADE_COLORS: [Rgba; 4] = [Rgba::RED, Rgba::GREEN, Rgba::BLUE, Rgba::YELLOW];
const SHAFT_COLOR: Rgba = Rgba::new(0.4, 0.2, 0.0, 1.0);
/// Upper bound on blades; larger requests are clamped.
pub const MAX_BLADES: usize = 64;

/// Pinwheel dimensions in device units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinwheelParams {
    pub hub: Vertex,
    pub blade_count: usize,
    pub blade_length: f32,
    /// Half-width of a blade at the hub.
    pub blade_width: f32,
    pub shaft_height: f32,
    pub shaft_width: f32,
}

impl Default for PinwheelParams {
    fn default() -> Self {
        Self {
            hub: Vertex::new(0.0, 0.3),
            blade_count: 4,
            blade_length: 0.4,
            blade_width: 0.12,
            shaft_height: 0.8,
            shaft_width: 0.03,
        }
    }
}

impl PinwheelParams {
    pub fn from_json(params: &Value) -> Self {
        let d = Self::default();
        Self {
            hub: Vertex::new(
                param_f32(params, "hub_x", d.hub.x),
                param_f32(params, "hub_y", d.hub.y),
            ),
            blade_count: param_usize(params, "blade_count", d.blade_count).min(MAX_BLADES),
            blade_length: param_f32(params, "blade_length", d.blade_length),
            blade_width: param_f32(params, "blade_width", d.blade_width),
            shaft_height: param_f32(params, "shaft_height", d.shaft_height),
            shaft_width: param_f32(params, "shaft_width", d.shaft_width),
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "hub_x": self.hub.x,
            "hub_y": self.hub.y,
            "blade_count": self.blade_count,
            "blade_length": self.blade_length,
            "blade_width": self.blade_width,
            "shaft_height": self.shaft_height,
            "shaft_width": self.shaft_width,
        })
    }

    pub fn total_vertices(&self) -> usize {
        self.blade_count.min(MAX_BLADES) * BLADE_VERTEX_COUNT + QUAD_VERTEX_COUNT
    }
}

/// The shaft hangs from the hub, centered on it horizontally.
pub fn shaft(hub: Vertex, height: f32, width: f32) -> Shape {
    let half = width / 2.0;
    Shape::solid(
        quad(hub.x - half, hub.y, hub.x + half, hub.y - height),
        SHAFT_COLOR,
    )
}

/// Blades at `360°·i/blade_count`, then the shaft. Blades beyond
/// [`MAX_BLADES`] are dropped.
pub fn build(params: &PinwheelParams) -> Shape {
    let blade_count = params.blade_count.min(MAX_BLADES);
    let mut shape = Shape::with_colors(Vec::new(), Vec::new());
    for i in 0..blade_count {
        let angle = 360.0 * i as f32 / blade_count as f32;
        let color = BLADE_COLORS[i % BLADE_COLORS.len()];
        shape.extend(Shape::solid(
            blade(params.hub, params.blade_length, params.blade_width, angle),
            color,
        ));
    }
    shape.extend(shaft(params.hub, params.shaft_height, params.shaft_width));
    shape
}

pub fn scene(params: &PinwheelParams) -> Scene {
    Scene::new("pinwheel", ProgramKind::VertexColor).pass(Pass::single(
        "pinwheel",
        build(params),
        Primitive::Triangles,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn close(a: Vertex, b: Vertex) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    #[test]
    fn default_pinwheel_has_thirty_vertices() {
        let p = PinwheelParams::default();
        let shape = build(&p);
        assert_eq!(shape.vertex_count(), 30);
        assert_eq!(p.total_vertices(), 30);
        assert_eq!(shape.colors.as_ref().map(Vec::len), Some(30));
    }

    #[test]
    fn blades_point_along_quarter_turns() {
        let shape = build(&PinwheelParams::default());
        let tips: Vec<Vertex> = (0..4).map(|i| shape.vertices[i * 6 + 1]).collect();
        assert!(close(tips[0], Vertex::new(0.4, 0.3)), "{:?}", tips[0]);
        assert!(close(tips[1], Vertex::new(0.0, 0.7)), "{:?}", tips[1]);
        assert!(close(tips[2], Vertex::new(-0.4, 0.3)), "{:?}", tips[2]);
        assert!(close(tips[3], Vertex::new(0.0, -0.1)), "{:?}", tips[3]);
    }

    #[test]
    fn blade_colors_follow_index_then_shaft_is_brown() {
        let shape = build(&PinwheelParams::default());
        let colors = shape.colors.unwrap();
        for (i, expected) in BLADE_COLORS.iter().enumerate() {
            assert!(colors[i * 6..i * 6 + 6].iter().all(|c| c == expected));
        }
        assert!(colors[24..].iter().all(|c| *c == Rgba::new(0.4, 0.2, 0.0, 1.0)));
    }

    #[test]
    fn shaft_hangs_below_the_hub() {
        let s = shaft(Vertex::new(0.0, 0.3), 0.8, 0.03);
        assert_eq!(s.vertices[0], Vertex::new(-0.015, 0.3));
        assert!(close(s.vertices[2], Vertex::new(0.015, -0.5)));
    }

    #[test]
    fn scene_is_one_draw_without_clear() {
        let scene = scene(&PinwheelParams::default());
        assert!(scene.validate().is_ok());
        assert_eq!(scene.clear_color, None);
        assert_eq!(scene.draw_count(), 1);
        assert_eq!(scene.passes[0].draws[0].count, 30);
    }

    #[test]
    fn from_json_overrides_blade_count() {
        let p = PinwheelParams::from_json(&json!({"blade_count": 6}));
        assert_eq!(p.blade_count, 6);
        assert_eq!(p.blade_length, 0.4);
        assert_eq!(build(&p).vertex_count(), 42);
    }

    #[test]
    fn blade_colors_cycle_past_four_blades() {
        let p = PinwheelParams {
            blade_count: 6,
            ..PinwheelParams::default()
        };
        let colors = build(&p).colors.unwrap();
        assert_eq!(colors.len(), 42);
        let blade = |i: usize| &colors[i * 6..i * 6 + 6];
        assert!(blade(3).iter().all(|c| *c == Rgba::YELLOW));
        assert!(blade(4).iter().all(|c| *c == Rgba::RED), "{:?}", blade(4));
        assert!(blade(5).iter().all(|c| *c == Rgba::GREEN), "{:?}", blade(5));
        assert!(colors[36..].iter().all(|c| *c == SHAFT_COLOR));
    }

    #[test]
    fn huge_blade_counts_are_clamped() {
        let p = PinwheelParams::from_json(&json!({"blade_count": u64::MAX}));
        assert_eq!(p.blade_count, MAX_BLADES);
        let direct = PinwheelParams {
            blade_count: usize::MAX,
            ..PinwheelParams::default()
        };
        assert_eq!(build(&direct).vertex_count(), MAX_BLADES * 6 + 6);
        assert_eq!(direct.total_vertices(), MAX_BLADES * 6 + 6);
    }
}
