//! Buffer upload and draw sequencing.
//!
//! [`run`] replays a [`Scene`] against any [`DrawTarget`]: the GPU renderer
//! (`render::GlRenderer`, behind the `render` feature), the CPU rasterizer in
//! the gallery crate, or a recording target in tests. Every pass pays a full
//! upload-and-draw round trip; there is no batching or buffer pooling.

use crate::color::Rgba;
use crate::error::SketchError;
use crate::scene::{Primitive, ProgramKind, Scene};
use crate::vertex::Vertex;

/// How vertex attributes are read from the uploaded buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeLayout {
    /// Components per position (always 2 for this workspace).
    pub position_components: u8,
    /// Components per color, when a color attribute is bound.
    pub color_components: Option<u8>,
}

impl AttributeLayout {
    pub const POSITION_ONLY: AttributeLayout = AttributeLayout {
        position_components: 2,
        color_components: None,
    };

    pub const POSITION_COLOR: AttributeLayout = AttributeLayout {
        position_components: 2,
        color_components: Some(4),
    };
}

/// Something draw calls can be issued against.
///
/// Methods mirror the immediate-mode calls a scene needs, in the order
/// [`run`] issues them.
pub trait DrawTarget {
    /// The program this target is bound to, if it is bound to one. A bound
    /// target only accepts scenes built for that program.
    fn program(&self) -> Option<ProgramKind> {
        None
    }

    /// Clears the color buffer.
    fn clear(&mut self, color: Rgba) -> Result<(), SketchError>;

    /// Replaces the contents of the position buffer.
    fn upload_positions(&mut self, vertices: &[Vertex]) -> Result<(), SketchError>;

    /// Replaces the contents of the color buffer.
    fn upload_colors(&mut self, colors: &[Rgba]) -> Result<(), SketchError>;

    /// (Re)describes how attributes are read from the buffers.
    fn set_layout(&mut self, layout: AttributeLayout) -> Result<(), SketchError>;

    /// Sets the uniform fill color for subsequent draws.
    fn set_fill(&mut self, color: Rgba) -> Result<(), SketchError>;

    /// Sets the point size in pixels for subsequent point draws.
    fn set_point_size(&mut self, size: f32) -> Result<(), SketchError>;

    /// Assembles and rasterizes `count` vertices starting at `first`.
    fn draw(&mut self, primitive: Primitive, first: usize, count: usize)
        -> Result<(), SketchError>;
}

/// Replays `scene` against `target`.
///
/// The scene is validated first, and checked against the target's program,
/// so an invalid or mismatched scene issues no calls at all.
/// The attribute layout is re-described only when it differs from the
/// previous pass's layout.
///
/// # Errors
///
/// Returns the validation error, `ProgramMismatch`, or the first error the
/// target reports.
pub fn run<T: DrawTarget + ?Sized>(scene: &Scene, target: &mut T) -> Result<(), SketchError> {
    scene.validate()?;
    if let Some(bound) = target.program() {
        if bound != scene.program {
            return Err(SketchError::ProgramMismatch {
                scene: scene.program,
                target: bound,
            });
        }
    }
    log::debug!(
        "drawing scene '{}': {} passes, {} draws",
        scene.name,
        scene.passes.len(),
        scene.draw_count()
    );

    if let Some(color) = scene.clear_color {
        target.clear(color)?;
    }

    let mut current_layout = None;
    for pass in &scene.passes {
        target.upload_positions(&pass.shape.vertices)?;
        let layout = match &pass.shape.colors {
            Some(colors) => {
                target.upload_colors(colors)?;
                AttributeLayout::POSITION_COLOR
            }
            None => AttributeLayout::POSITION_ONLY,
        };

        if current_layout != Some(layout) {
            target.set_layout(layout)?;
            current_layout = Some(layout);
        }

        log::trace!(
            "pass '{}': {} vertices, {} draws",
            pass.label,
            pass.shape.vertex_count(),
            pass.draws.len()
        );

        for draw in &pass.draws {
            if let Some(fill) = draw.fill {
                target.set_fill(fill)?;
            }
            if let Some(size) = draw.point_size {
                target.set_point_size(size)?;
            }
            target.draw(draw.primitive, draw.first, draw.count)?;
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod recording {
    //! A target that records calls instead of drawing.

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Clear(Rgba),
        UploadPositions(usize),
        UploadColors(usize),
        Layout(AttributeLayout),
        Fill(Rgba),
        PointSize(f32),
        Draw(Primitive, usize, usize),
    }

    #[derive(Default)]
    pub struct Recorder {
        pub calls: Vec<Call>,
        pub program: Option<ProgramKind>,
    }

    impl Recorder {
        pub fn draws(&self) -> Vec<(Primitive, usize, usize)> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Draw(p, f, n) => Some((*p, *f, *n)),
                    _ => None,
                })
                .collect()
        }
    }

    impl DrawTarget for Recorder {
        fn program(&self) -> Option<ProgramKind> {
            self.program
        }

        fn clear(&mut self, color: Rgba) -> Result<(), SketchError> {
            self.calls.push(Call::Clear(color));
            Ok(())
        }

        fn upload_positions(&mut self, vertices: &[Vertex]) -> Result<(), SketchError> {
            self.calls.push(Call::UploadPositions(vertices.len()));
            Ok(())
        }

        fn upload_colors(&mut self, colors: &[Rgba]) -> Result<(), SketchError> {
            self.calls.push(Call::UploadColors(colors.len()));
            Ok(())
        }

        fn set_layout(&mut self, layout: AttributeLayout) -> Result<(), SketchError> {
            self.calls.push(Call::Layout(layout));
            Ok(())
        }

        fn set_fill(&mut self, color: Rgba) -> Result<(), SketchError> {
            self.calls.push(Call::Fill(color));
            Ok(())
        }

        fn set_point_size(&mut self, size: f32) -> Result<(), SketchError> {
            self.calls.push(Call::PointSize(size));
            Ok(())
        }

        fn draw(
            &mut self,
            primitive: Primitive,
            first: usize,
            count: usize,
        ) -> Result<(), SketchError> {
            self.calls.push(Call::Draw(primitive, first, count));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recording::{Call, Recorder};
    use super::*;
    use crate::geometry::{colored_fan, fan, quad};
    use crate::scene::{DrawCall, Pass, ProgramKind, Shape};

    #[test]
    fn uniform_scene_replays_in_order() {
        let scene = Scene::new("s", ProgramKind::UniformColor)
            .clear(Rgba::BLACK)
            .pass(Pass::filled(
                "wheel",
                Shape::new(fan(Vertex::ORIGIN, 0.15, 18)),
                Primitive::TriangleFan,
                Rgba::RED,
            ))
            .pass(Pass::filled(
                "body",
                Shape::new(quad(-0.6, -0.25, 0.6, -0.5)),
                Primitive::Triangles,
                Rgba::RED,
            ));

        let mut rec = Recorder::default();
        run(&scene, &mut rec).unwrap();

        assert_eq!(
            rec.calls,
            vec![
                Call::Clear(Rgba::BLACK),
                Call::UploadPositions(20),
                Call::Layout(AttributeLayout::POSITION_ONLY),
                Call::Fill(Rgba::RED),
                Call::Draw(Primitive::TriangleFan, 0, 20),
                Call::UploadPositions(6),
                Call::Fill(Rgba::RED),
                Call::Draw(Primitive::Triangles, 0, 6),
            ]
        );
    }

    #[test]
    fn layout_is_redescribed_only_when_it_changes() {
        let colored = || colored_fan(Vertex::ORIGIN, 0.2, 8, Rgba::WHITE, Rgba::RED);
        let scene = Scene::new("s", ProgramKind::VertexColor)
            .pass(Pass::single("a", colored(), Primitive::TriangleFan))
            .pass(Pass::single("b", colored(), Primitive::TriangleFan))
            .pass(Pass::single(
                "c",
                Shape::new(quad(0.0, 0.1, 0.1, 0.0)),
                Primitive::Triangles,
            ));

        let mut rec = Recorder::default();
        run(&scene, &mut rec).unwrap();

        let layouts: Vec<_> = rec
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Layout(_)))
            .cloned()
            .collect();
        assert_eq!(
            layouts,
            vec![
                Call::Layout(AttributeLayout::POSITION_COLOR),
                Call::Layout(AttributeLayout::POSITION_ONLY),
            ]
        );
    }

    #[test]
    fn strided_draws_slice_one_upload() {
        let mut shape = colored_fan(Vertex::new(0.5, 0.0), 0.1, 10, Rgba::WHITE, Rgba::RED);
        shape.extend(colored_fan(Vertex::ORIGIN, 0.2, 10, Rgba::WHITE, Rgba::YELLOW));
        let scene = Scene::new("s", ProgramKind::VertexColor).pass(
            Pass::new("circles", shape)
                .draw(DrawCall::new(Primitive::TriangleFan, 0, 12))
                .draw(DrawCall::new(Primitive::TriangleFan, 12, 12)),
        );

        let mut rec = Recorder::default();
        run(&scene, &mut rec).unwrap();

        assert_eq!(rec.calls[0], Call::UploadPositions(24));
        assert_eq!(rec.calls[1], Call::UploadColors(24));
        assert_eq!(
            rec.draws(),
            vec![
                (Primitive::TriangleFan, 0, 12),
                (Primitive::TriangleFan, 12, 12)
            ]
        );
    }

    #[test]
    fn point_size_is_set_before_draw() {
        let scene = Scene::new("p", ProgramKind::UniformColor).pass(
            Pass::new("point", Shape::new(vec![Vertex::ORIGIN])).draw(
                DrawCall::new(Primitive::Points, 0, 1)
                    .fill(Rgba::RED)
                    .point_size(5.0),
            ),
        );
        let mut rec = Recorder::default();
        run(&scene, &mut rec).unwrap();
        let tail = &rec.calls[rec.calls.len() - 3..];
        assert_eq!(
            tail,
            &[
                Call::Fill(Rgba::RED),
                Call::PointSize(5.0),
                Call::Draw(Primitive::Points, 0, 1)
            ]
        );
    }

    #[test]
    fn invalid_scene_issues_no_calls() {
        let scene = Scene::new("bad", ProgramKind::UniformColor)
            .clear(Rgba::BLACK)
            .pass(
                Pass::new("q", Shape::new(quad(0.0, 1.0, 1.0, 0.0)))
                    .draw(DrawCall::new(Primitive::Triangles, 0, 9)),
            );
        let mut rec = Recorder::default();
        let result = run(&scene, &mut rec);
        assert!(matches!(result, Err(SketchError::VertexCountMismatch { .. })));
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn bound_target_refuses_other_programs() {
        let scene = Scene::new("flower-like", ProgramKind::VertexColor).clear(Rgba::BLACK).pass(
            Pass::single(
                "c",
                colored_fan(Vertex::ORIGIN, 0.2, 8, Rgba::WHITE, Rgba::RED),
                Primitive::TriangleFan,
            ),
        );
        let mut rec = Recorder {
            program: Some(ProgramKind::UniformColor),
            ..Recorder::default()
        };
        let result = run(&scene, &mut rec);
        assert!(matches!(
            result,
            Err(SketchError::ProgramMismatch {
                scene: ProgramKind::VertexColor,
                target: ProgramKind::UniformColor,
            })
        ));
        assert!(rec.calls.is_empty());

        rec.program = Some(ProgramKind::VertexColor);
        assert!(run(&scene, &mut rec).is_ok());
    }

    #[test]
    fn target_errors_stop_the_sequence() {
        struct Failing(usize);
        impl DrawTarget for Failing {
            fn clear(&mut self, _: Rgba) -> Result<(), SketchError> {
                Ok(())
            }
            fn upload_positions(&mut self, _: &[Vertex]) -> Result<(), SketchError> {
                Ok(())
            }
            fn upload_colors(&mut self, _: &[Rgba]) -> Result<(), SketchError> {
                Ok(())
            }
            fn set_layout(&mut self, _: AttributeLayout) -> Result<(), SketchError> {
                Ok(())
            }
            fn set_fill(&mut self, _: Rgba) -> Result<(), SketchError> {
                Ok(())
            }
            fn set_point_size(&mut self, _: f32) -> Result<(), SketchError> {
                Ok(())
            }
            fn draw(&mut self, _: Primitive, _: usize, _: usize) -> Result<(), SketchError> {
                self.0 += 1;
                Err(SketchError::Gpu("lost context".into()))
            }
        }

        let scene = Scene::new("s", ProgramKind::UniformColor)
            .pass(Pass::single("a", Shape::new(quad(0.0, 1.0, 1.0, 0.0)), Primitive::Triangles))
            .pass(Pass::single("b", Shape::new(quad(0.0, 1.0, 1.0, 0.0)), Primitive::Triangles));
        let mut target = Failing(0);
        assert!(run(&scene, &mut target).is_err());
        assert_eq!(target.0, 1, "sequence should stop at the first failure");
    }
}
