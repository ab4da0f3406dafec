//! RGBA color type shared by uniform fills and per-vertex color attributes.
//!
//! Components are `f32` in [0, 1], the same layout the fragment shaders
//! consume, so a `&[Rgba]` can be uploaded directly as a 4-component
//! float attribute.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA color with components in [0, 1].
///
/// Serializes as a 4-element array `[r, g, b, a]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Rgba = Rgba::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Rgba = Rgba::new(0.0, 0.0, 1.0, 1.0);
    pub const YELLOW: Rgba = Rgba::new(1.0, 1.0, 0.0, 1.0);
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from an RGB triple.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Components as an array, in shader order.
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Quantizes to 8-bit RGBA with rounding. Out-of-range components are clamped.
    pub fn to_rgba8(self) -> [u8; 4] {
        self.to_array()
            .map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// Barycentric blend of three colors, as the rasterizer interpolates
    /// a varying across a triangle. Weights are expected to sum to 1.
    pub fn blend3(colors: [Rgba; 3], weights: [f32; 3]) -> Rgba {
        let mut out = [0.0_f32; 4];
        for (color, w) in colors.iter().zip(weights) {
            for (o, c) in out.iter_mut().zip(color.to_array()) {
                *o += c * w;
            }
        }
        Rgba::from(out)
    }
}

impl From<[f32; 4]> for Rgba {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba> for [f32; 4] {
    fn from(c: Rgba) -> Self {
        c.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        let c = Rgba::rgb(0.1, 0.2, 0.3);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn to_rgba8_rounds_and_clamps() {
        assert_eq!(Rgba::new(0.5, 1.5, -0.2, 1.0).to_rgba8(), [128, 255, 0, 255]);
        assert_eq!(Rgba::rgb(0.9, 0.9, 0.9).to_rgba8(), [230, 230, 230, 255]);
    }

    #[test]
    fn blend3_with_unit_weight_returns_that_color() {
        let c = Rgba::blend3([Rgba::RED, Rgba::GREEN, Rgba::BLUE], [0.0, 1.0, 0.0]);
        assert_eq!(c, Rgba::GREEN);
    }

    #[test]
    fn blend3_averages_components() {
        let c = Rgba::blend3([Rgba::WHITE, Rgba::BLACK, Rgba::BLACK], [0.5, 0.25, 0.25]);
        assert!((c.r - 0.5).abs() < 1e-6, "r = {}", c.r);
        assert!((c.a - 1.0).abs() < 1e-6, "a = {}", c.a);
    }

    #[test]
    fn color_slice_casts_to_floats() {
        let colors = [Rgba::RED, Rgba::YELLOW];
        let floats: &[f32] = bytemuck::cast_slice(&colors);
        assert_eq!(floats, &[1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn serializes_as_array() {
        let json = serde_json::to_string(&Rgba::new(1.0, 0.5, 0.0, 1.0)).unwrap();
        assert_eq!(json, "[1.0,0.5,0.0,1.0]");
        let back: Rgba = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgba::new(1.0, 0.5, 0.0, 1.0));
    }
}
