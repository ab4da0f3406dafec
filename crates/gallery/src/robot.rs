//! Robot face: gray head and body, black square eyes, on light gray.

use gl_sketches_core::vertex::{from_pairs, Vertex};
use gl_sketches_core::{Pass, Primitive, ProgramKind, Rgba, Scene, Shape};

pub const CANVAS_ID: &str = "glCanvasRobot";

const BACKGROUND: Rgba = Rgba::rgb(0.9, 0.9, 0.9);
const METAL: Rgba = Rgba::rgb(0.5, 0.5, 0.5);
const EYE: Rgba = Rgba::BLACK;

const HEAD: [[f32; 2]; 6] = [
    [-0.25, 0.6], [-0.25, 0.2], [0.25, 0.2],
    [-0.25, 0.6], [0.25, 0.2], [0.25, 0.6],
];

const BODY: [[f32; 2]; 6] = [
    [-0.3, 0.2], [-0.3, -0.4], [0.3, -0.4],
    [-0.3, 0.2], [0.3, -0.4], [0.3, 0.2],
];

const LEFT_EYE: [[f32; 2]; 6] = [
    [-0.18, 0.45], [-0.18, 0.35], [-0.08, 0.35],
    [-0.18, 0.45], [-0.08, 0.35], [-0.08, 0.45],
];

const RIGHT_EYE: [[f32; 2]; 6] = [
    [0.08, 0.45], [0.08, 0.35], [0.18, 0.45],
    [0.18, 0.45], [0.18, 0.35], [0.08, 0.35],
];

pub fn head() -> Vec<Vertex> {
    from_pairs(&HEAD)
}

pub fn body() -> Vec<Vertex> {
    from_pairs(&BODY)
}

pub fn left_eye() -> Vec<Vertex> {
    from_pairs(&LEFT_EYE)
}

pub fn right_eye() -> Vec<Vertex> {
    from_pairs(&RIGHT_EYE)
}

/// Head, body, then both eyes, so the eyes land on top of the head.
pub fn scene() -> Scene {
    let parts = [
        ("head", head(), METAL),
        ("body", body(), METAL),
        ("left eye", left_eye(), EYE),
        ("right eye", right_eye(), EYE),
    ];
    parts.into_iter().fold(
        Scene::new("robot", ProgramKind::UniformColor).clear(BACKGROUND),
        |scene, (label, vertices, fill)| {
            scene.pass(Pass::filled(label, Shape::new(vertices), Primitive::Triangles, fill))
        },
    )
}
