//! Car: two wheels and a five-part red body on black.

use gl_sketches_core::geometry::fan;
use gl_sketches_core::vertex::{from_pairs, Vertex};
use gl_sketches_core::{Pass, Primitive, ProgramKind, Rgba, Scene, Shape};

pub const CANVAS_ID: &str = "glCanvasCar";

const WHEEL_RADIUS: f32 = 0.15;
const WHEEL_SIDES: usize = 18;
const WHEEL_CENTERS: [Vertex; 2] = [Vertex::new(-0.4, -0.7), Vertex::new(0.4, -0.7)];

const PAINT: Rgba = Rgba::RED;

const BODY: [[f32; 2]; 6] = [
    [-0.6, -0.25], [0.6, -0.25], [0.6, -0.5],
    [-0.6, -0.25], [0.6, -0.5], [-0.6, -0.5],
];

const SEAT_SUPPORT: [[f32; 2]; 6] = [
    [0.63, -0.25], [0.9, -0.25], [0.9, -0.35],
    [0.63, -0.25], [0.9, -0.35], [0.63, -0.35],
];

const SEAT_BACK: [[f32; 2]; 6] = [
    [0.4, -0.22], [0.85, 0.07], [0.85, -0.22],
    [0.4, -0.22], [0.85, 0.07], [0.4, 0.07],
];

const WINDSHIELD: [[f32; 2]; 3] = [[-0.15, 0.07], [-0.6, -0.2], [-0.15, -0.2]];

const ROOF: [[f32; 2]; 6] = [
    [-0.13, 0.07], [0.37, 0.07], [0.37, 0.04],
    [-0.13, 0.07], [0.37, 0.04], [-0.13, 0.04],
];

pub fn wheel(center: Vertex) -> Vec<Vertex> {
    fan(center, WHEEL_RADIUS, WHEEL_SIDES)
}

pub fn body() -> Vec<Vertex> {
    from_pairs(&BODY)
}

pub fn seat_support() -> Vec<Vertex> {
    from_pairs(&SEAT_SUPPORT)
}

pub fn seat_back() -> Vec<Vertex> {
    from_pairs(&SEAT_BACK)
}

/// The only single-triangle part.
pub fn windshield() -> Vec<Vertex> {
    from_pairs(&WINDSHIELD)
}

pub fn roof() -> Vec<Vertex> {
    from_pairs(&ROOF)
}

/// Wheels first (fans), then body parts (triangle lists), each its own
/// upload.
pub fn scene() -> Scene {
    let mut scene = Scene::new("car", ProgramKind::UniformColor).clear(Rgba::BLACK);
    for (i, center) in WHEEL_CENTERS.into_iter().enumerate() {
        scene = scene.pass(Pass::filled(
            format!("wheel {i}"),
            Shape::new(wheel(center)),
            Primitive::TriangleFan,
            PAINT,
        ));
    }

    let parts: [(&str, Vec<Vertex>); 5] = [
        ("body", body()),
        ("seat support", seat_support()),
        ("seat back", seat_back()),
        ("windshield", windshield()),
        ("roof", roof()),
    ];
    parts.into_iter().fold(scene, |scene, (label, vertices)| {
        scene.pass(Pass::filled(label, Shape::new(vertices), Primitive::Triangles, PAINT))
    })
}
