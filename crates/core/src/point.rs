//! Interactive point exercise.
//!
//! A single point on a black canvas. Mouse-down moves the point to the
//! clicked position, `ArrowUp` / `ArrowDown` grow and shrink it in steps of
//! [`POINT_SIZE_STEP`] (never below [`MIN_POINT_SIZE`]), and `c` picks a new
//! random color. Every input produces a redraw; the state lives here and the
//! host (browser session or CLI replay) only forwards events.

use crate::color::Rgba;
use crate::error::SketchError;
use crate::prng::Xorshift64;
use crate::scene::{DrawCall, Pass, Primitive, ProgramKind, Scene, Shape};
use crate::vertex::Vertex;

/// Starting point size, also the floor for shrinking.
pub const MIN_POINT_SIZE: f32 = 5.0;
/// Size change per arrow key press.
pub const POINT_SIZE_STEP: f32 = 5.0;

/// Keys the exercise reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// `c`: random color.
    Recolor,
    /// `ArrowUp`: grow.
    Grow,
    /// `ArrowDown`: shrink, floored at the minimum size.
    Shrink,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value. Other keys are ignored.
    pub fn from_key_name(name: &str) -> Option<Key> {
        match name {
            "c" => Some(Key::Recolor),
            "ArrowUp" => Some(Key::Grow),
            "ArrowDown" => Some(Key::Shrink),
            _ => None,
        }
    }
}

/// Converts a pixel offset inside a `width` x `height` canvas to device
/// coordinates: `x' = 2x/W - 1`, `y' = -2y/H + 1` (y axis flipped).
///
/// # Errors
///
/// Returns `SketchError::InvalidDimensions` if either dimension is zero.
pub fn canvas_to_device(
    offset_x: f32,
    offset_y: f32,
    width: u32,
    height: u32,
) -> Result<Vertex, SketchError> {
    if width == 0 || height == 0 {
        return Err(SketchError::InvalidDimensions);
    }
    let x = 2.0 * offset_x / width as f32 - 1.0;
    let y = -2.0 * offset_y / height as f32 + 1.0;
    Ok(Vertex::new(x, y))
}

/// State of the point exercise.
#[derive(Debug, Clone)]
pub struct PointExercise {
    position: Vertex,
    point_size: f32,
    color: Rgba,
    rng: Xorshift64,
}

impl PointExercise {
    /// Red 5px point at the origin. `seed` drives the recolor sequence.
    pub fn new(seed: u64) -> Self {
        Self {
            position: Vertex::ORIGIN,
            point_size: MIN_POINT_SIZE,
            color: Rgba::RED,
            rng: Xorshift64::new(seed),
        }
    }

    pub fn position(&self) -> Vertex {
        self.position
    }

    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Moves the point to a mouse-down at pixel offset `(offset_x, offset_y)`.
    pub fn click(
        &mut self,
        offset_x: f32,
        offset_y: f32,
        width: u32,
        height: u32,
    ) -> Result<(), SketchError> {
        self.position = canvas_to_device(offset_x, offset_y, width, height)?;
        log::debug!(
            "point moved to ({:.3}, {:.3})",
            self.position.x,
            self.position.y
        );
        Ok(())
    }

    /// Applies a key press.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Recolor => {
                self.color = Rgba::rgb(
                    self.rng.next_f32(),
                    self.rng.next_f32(),
                    self.rng.next_f32(),
                );
            }
            Key::Grow => self.point_size += POINT_SIZE_STEP,
            Key::Shrink => {
                if self.point_size > MIN_POINT_SIZE {
                    self.point_size = (self.point_size - POINT_SIZE_STEP).max(MIN_POINT_SIZE);
                }
            }
        }
        log::debug!(
            "key {key:?}: size {}, color {:?}",
            self.point_size,
            self.color
        );
    }

    /// Applies a DOM key name. Returns the recognized key, if any; unknown
    /// keys leave the state untouched.
    pub fn press_named(&mut self, name: &str) -> Option<Key> {
        let key = Key::from_key_name(name)?;
        self.press(key);
        Some(key)
    }

    /// Handles a keydown and returns the frame to draw. Every key press
    /// redraws; unrecognized keys leave the state as it was.
    pub fn key_down(&mut self, name: &str) -> Scene {
        if self.press_named(name).is_none() {
            log::trace!("key '{name}' ignored");
        }
        self.scene()
    }

    /// Black background and the single point.
    pub fn scene(&self) -> Scene {
        Scene::new("point", ProgramKind::UniformColor)
            .clear(Rgba::BLACK)
            .pass(
                Pass::new("point", Shape::new(vec![self.position])).draw(
                    DrawCall::new(Primitive::Points, 0, 1)
                        .fill(self.color)
                        .point_size(self.point_size),
                ),
            )
    }
}

impl Default for PointExercise {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_and_center_map_to_device_space() {
        let (w, h) = (640, 480);
        assert_eq!(canvas_to_device(0.0, 0.0, w, h).unwrap(), Vertex::new(-1.0, 1.0));
        assert_eq!(canvas_to_device(640.0, 480.0, w, h).unwrap(), Vertex::new(1.0, -1.0));
        assert_eq!(canvas_to_device(320.0, 240.0, w, h).unwrap(), Vertex::new(0.0, 0.0));
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        assert!(matches!(
            canvas_to_device(1.0, 1.0, 0, 100),
            Err(SketchError::InvalidDimensions)
        ));
    }

    #[test]
    fn defaults_match_the_exercise() {
        let p = PointExercise::new(1);
        assert_eq!(p.position(), Vertex::ORIGIN);
        assert_eq!(p.point_size(), 5.0);
        assert_eq!(p.color(), Rgba::RED);
    }

    #[test]
    fn arrow_up_grows_by_five() {
        let mut p = PointExercise::new(1);
        p.press(Key::Grow);
        assert_eq!(p.point_size(), 10.0);
    }

    #[test]
    fn arrow_down_is_floored_at_five() {
        let mut p = PointExercise::new(1);
        p.press(Key::Shrink);
        assert_eq!(p.point_size(), 5.0);
        p.press(Key::Grow);
        p.press(Key::Grow);
        p.press(Key::Shrink);
        assert_eq!(p.point_size(), 10.0);
    }

    #[test]
    fn recolor_is_opaque_and_seeded() {
        let mut a = PointExercise::new(99);
        let mut b = PointExercise::new(99);
        a.press(Key::Recolor);
        b.press(Key::Recolor);
        assert_eq!(a.color(), b.color());
        assert_eq!(a.color().a, 1.0);
        assert_ne!(a.color(), Rgba::RED);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut p = PointExercise::new(1);
        assert_eq!(p.press_named("x"), None);
        assert_eq!(p.press_named("Enter"), None);
        assert_eq!(p.point_size(), 5.0);
        assert_eq!(p.color(), Rgba::RED);
        assert_eq!(p.press_named("ArrowUp"), Some(Key::Grow));
    }

    #[test]
    fn every_key_down_yields_a_frame() {
        let mut p = PointExercise::new(1);
        let before = p.scene();
        assert_eq!(p.key_down("Shift"), before);
        let grown = p.key_down("ArrowUp");
        assert_eq!(grown.passes[0].draws[0].point_size, Some(10.0));
    }

    #[test]
    fn click_moves_the_point() {
        let mut p = PointExercise::new(1);
        p.click(100.0, 100.0, 400, 400).unwrap();
        assert_eq!(p.position(), Vertex::new(-0.5, 0.5));
    }

    #[test]
    fn scene_draws_one_point_with_current_state() {
        let mut p = PointExercise::new(1);
        p.press(Key::Grow);
        let scene = p.scene();
        assert!(scene.validate().is_ok());
        assert_eq!(scene.clear_color, Some(Rgba::BLACK));
        let draw = scene.passes[0].draws[0];
        assert_eq!(draw.primitive, Primitive::Points);
        assert_eq!(draw.count, 1);
        assert_eq!(draw.point_size, Some(10.0));
        assert_eq!(draw.fill, Some(Rgba::RED));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn in_canvas_clicks_land_in_device_range(
                w in 1_u32..4096,
                h in 1_u32..4096,
                fx in 0.0_f32..=1.0,
                fy in 0.0_f32..=1.0,
            ) {
                let v = canvas_to_device(fx * w as f32, fy * h as f32, w, h).unwrap();
                prop_assert!((-1.0001..=1.0001).contains(&v.x), "x = {}", v.x);
                prop_assert!((-1.0001..=1.0001).contains(&v.y), "y = {}", v.y);
            }
        }
    }
}
