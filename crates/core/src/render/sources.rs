//! GLSL ES 3.00 sources for the two sketch programs.

use crate::scene::ProgramKind;

/// Position attribute only; point size from a uniform.
pub const UNIFORM_COLOR_VERTEX: &str = r#"#version 300 es
in vec2 a_position;
uniform float u_point_size;
void main() {
    gl_Position = vec4(a_position, 0.0, 1.0);
    gl_PointSize = u_point_size;
}
"#;

/// Flat fill from `u_color`.
pub const UNIFORM_COLOR_FRAGMENT: &str = r#"#version 300 es
precision mediump float;
uniform vec4 u_color;
out vec4 frag_color;
void main() {
    frag_color = u_color;
}
"#;

/// Position and color attributes; color passed through as a varying.
pub const VERTEX_COLOR_VERTEX: &str = r#"#version 300 es
in vec2 a_position;
in vec4 a_color;
out vec4 v_color;
void main() {
    gl_Position = vec4(a_position, 0.0, 1.0);
    v_color = a_color;
}
"#;

/// Interpolated per-vertex color.
pub const VERTEX_COLOR_FRAGMENT: &str = r#"#version 300 es
precision mediump float;
in vec4 v_color;
out vec4 frag_color;
void main() {
    frag_color = v_color;
}
"#;

pub const POSITION_ATTRIBUTE: &str = "a_position";
pub const COLOR_ATTRIBUTE: &str = "a_color";
pub const COLOR_UNIFORM: &str = "u_color";
pub const POINT_SIZE_UNIFORM: &str = "u_point_size";

impl ProgramKind {
    /// `(vertex, fragment)` sources for this program.
    pub fn sources(self) -> (&'static str, &'static str) {
        match self {
            ProgramKind::UniformColor => (UNIFORM_COLOR_VERTEX, UNIFORM_COLOR_FRAGMENT),
            ProgramKind::VertexColor => (VERTEX_COLOR_VERTEX, VERTEX_COLOR_FRAGMENT),
        }
    }
}
