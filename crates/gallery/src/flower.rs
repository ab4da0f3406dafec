//! Flower: a ring of gradient petals around a center disc, on a green stem.
//!
//! All circles are concatenated into one buffer (petals in ascending index,
//! center last) and drawn as separate fans by striding through it in steps
//! of `circle_vertex_count`. The stem is a second upload.

use gl_sketches_core::geometry::{colored_fan, fan_vertex_count, quad, radial_placements};
use gl_sketches_core::params::{param_f32, param_usize};
use gl_sketches_core::{DrawCall, Pass, Primitive, ProgramKind, Rgba, Scene, Shape, Vertex};
use serde_json::{json, Value};

pub const CANVAS_ID: &str = "glCanvasFlower";

/// Boundary segments per circle.
pub const CIRCLE_SIDES: usize = 60;
/// Upper bound on petals; larger requests are clamped.
pub const MAX_PETALS: usize = 64;

const DEFAULT_PETAL_COUNT: usize = 6;
const DEFAULT_PETAL_DISTANCE: f32 = 0.7;
const PETAL_RADIUS: f32 = 0.22;
const PETAL_HUB: Rgba = Rgba::new(1.0, 0.6, 0.8, 1.0);
const PETAL_RIM: Rgba = Rgba::RED;
const CENTER_RADIUS: f32 = 0.3;
const CENTER_HUB: Rgba = Rgba::WHITE;
const CENTER_RIM: Rgba = Rgba::YELLOW;
const STEM_COLOR: Rgba = Rgba::GREEN;

/// Petal layout parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowerParams {
    pub petal_count: usize,
    /// Distance from the flower center to each petal center.
    pub petal_distance: f32,
}

impl Default for FlowerParams {
    fn default() -> Self {
        Self {
            petal_count: DEFAULT_PETAL_COUNT,
            petal_distance: DEFAULT_PETAL_DISTANCE,
        }
    }
}

impl FlowerParams {
    /// The layout the flower canvas draws: eight petals at distance 0.5.
    pub fn exhibit() -> Self {
        Self {
            petal_count: 8,
            petal_distance: 0.5,
        }
    }

    pub fn from_json(params: &Value) -> Self {
        let exhibit = Self::exhibit();
        Self {
            petal_count: param_usize(params, "petal_count", exhibit.petal_count).min(MAX_PETALS),
            petal_distance: param_f32(params, "petal_distance", exhibit.petal_distance),
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "petal_count": self.petal_count,
            "petal_distance": self.petal_distance,
        })
    }
}

/// Concatenated circle geometry plus the metadata needed to slice it.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowerGeometry {
    /// Every petal, then the center, with per-vertex colors.
    pub circles: Shape,
    pub circle_vertex_count: usize,
    pub total_circles: usize,
    pub stem: Shape,
    pub stem_vertex_count: usize,
}

/// The stem quad below the flower head.
pub fn stem() -> Shape {
    Shape::solid(quad(-0.1, -0.7, 0.1, -1.0), STEM_COLOR)
}

/// Petals beyond [`MAX_PETALS`] are dropped.
pub fn build(params: &FlowerParams) -> FlowerGeometry {
    let circle_vertex_count = fan_vertex_count(CIRCLE_SIDES);
    let petal_count = params.petal_count.min(MAX_PETALS);

    let mut circles = Shape::with_colors(Vec::new(), Vec::new());
    for center in radial_placements(petal_count, params.petal_distance) {
        circles.extend(colored_fan(center, PETAL_RADIUS, CIRCLE_SIDES, PETAL_HUB, PETAL_RIM));
    }
    circles.extend(colored_fan(
        Vertex::ORIGIN,
        CENTER_RADIUS,
        CIRCLE_SIDES,
        CENTER_HUB,
        CENTER_RIM,
    ));

    let stem = stem();
    let stem_vertex_count = stem.vertex_count();
    FlowerGeometry {
        circles,
        circle_vertex_count,
        total_circles: petal_count + 1,
        stem,
        stem_vertex_count,
    }
}

pub fn scene(params: &FlowerParams) -> Scene {
    let geometry = build(params);

    let circles = (0..geometry.total_circles).fold(
        Pass::new("circles", geometry.circles),
        |pass, i| {
            pass.draw(DrawCall::new(
                Primitive::TriangleFan,
                i * geometry.circle_vertex_count,
                geometry.circle_vertex_count,
            ))
        },
    );

    Scene::new("flower", ProgramKind::VertexColor)
        .clear(Rgba::BLACK)
        .pass(circles)
        .pass(Pass::single("stem", geometry.stem, Primitive::Triangles))
}
