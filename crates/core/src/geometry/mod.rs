//! Pure vertex builders.
//!
//! Every builder returns a freshly allocated, flat, ordered vertex sequence
//! for one primitive. Nothing here touches the GPU; the output is handed to
//! a [`Pass`](crate::scene::Pass) and uploaded by the draw sequencer.
//!
//! - [`fan`] -- regular polygon / circle tessellation for triangle fans.
//! - [`polygon`] -- axis-aligned quads and single triangles for triangle lists.
//! - [`layout`] -- even angular placement and pinwheel blade geometry.

pub mod fan;
pub mod layout;
pub mod polygon;

pub use fan::{colored_fan, fan, fan_vertex_count};
pub use layout::{blade, radial_angles, radial_placements, BLADE_VERTEX_COUNT};
pub use polygon::{quad, triangle, QUAD_VERTEX_COUNT};
