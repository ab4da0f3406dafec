//! One canvas bound to one GPU renderer.

use gl_sketches_core::render::{GlContext, GlRenderer};
use gl_sketches_core::{sequencer, ProgramKind, Scene, SketchError};
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext};

fn unavailable(what: impl Into<String>) -> SketchError {
    SketchError::ContextUnavailable(what.into())
}

/// Looks up `canvas_id` in the current document.
pub fn find_canvas(canvas_id: &str) -> Result<HtmlCanvasElement, SketchError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| unavailable("no document"))?;
    document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| unavailable(format!("no element with id '{canvas_id}'")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| unavailable(format!("element '{canvas_id}' is not a canvas")))
}

/// A canvas with its WebGL2 context and a renderer for one program kind.
pub struct Session {
    canvas: HtmlCanvasElement,
    renderer: GlRenderer,
}

impl Session {
    /// Acquires a WebGL2 context on the canvas and runs the renderer setup.
    ///
    /// # Errors
    ///
    /// `ContextUnavailable` if the canvas is missing or refuses WebGL2;
    /// shader and GPU errors from renderer setup.
    pub fn attach(canvas_id: &str, kind: ProgramKind) -> Result<Self, SketchError> {
        let canvas = find_canvas(canvas_id)?;
        let webgl = canvas
            .get_context("webgl2")
            .map_err(|_| unavailable(format!("webgl2 request failed on '{canvas_id}'")))?
            .ok_or_else(|| unavailable(format!("webgl2 not supported on '{canvas_id}'")))?
            .dyn_into::<WebGl2RenderingContext>()
            .map_err(|_| unavailable("context is not WebGL2"))?;

        let gl = glow::Context::from_webgl2_context(webgl);
        let ctx = GlContext::new(gl, canvas.width(), canvas.height())?;
        let renderer = GlRenderer::new(ctx, kind)?;
        log::info!("attached {kind:?} session to #{canvas_id}");
        Ok(Self { canvas, renderer })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Replays `scene` through the renderer.
    pub fn draw(&mut self, scene: &Scene) -> Result<(), SketchError> {
        sequencer::run(scene, &mut self.renderer)
    }

    /// Releases the GPU objects. The drawn frame stays on the canvas.
    pub fn close(self) {
        self.renderer.destroy();
    }
}
