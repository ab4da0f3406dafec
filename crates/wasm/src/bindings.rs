//! Functions exported to JavaScript.

use std::cell::RefCell;
use std::rc::Rc;

use gl_sketches_core::{PointExercise, ProgramKind, SketchError};
use gl_sketches_gallery::SketchKind;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::session::Session;
use crate::{canvas_id_or, logger, seed_from_millis, POINT_CANVAS_ID};

fn to_js(e: SketchError) -> JsValue {
    log::error!("{e}");
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen(start)]
pub fn init() {
    logger::init(log::LevelFilter::Info);
}

/// Draws a static sketch ("car", "flower", "pinwheel", "robot") once.
///
/// `canvas_id` defaults to the sketch's own canvas on the exercise page.
#[wasm_bindgen]
pub fn draw_sketch(name: &str, canvas_id: Option<String>) -> Result<(), JsValue> {
    let kind = SketchKind::from_name(name, &serde_json::Value::Null).map_err(to_js)?;
    let canvas_id = canvas_id_or(canvas_id, kind.canvas_id());
    let scene = kind.scene();

    let mut session = Session::attach(&canvas_id, scene.program).map_err(to_js)?;
    session.draw(&scene).map_err(to_js)?;
    session.close();
    Ok(())
}

struct PointSession {
    session: Session,
    exercise: PointExercise,
}

impl PointSession {
    fn redraw(&mut self) -> Result<(), SketchError> {
        let scene = self.exercise.scene();
        self.session.draw(&scene)
    }
}

/// Starts the interactive point: mouse-down on the canvas moves it, keys on
/// the page body grow, shrink or recolor it.
#[wasm_bindgen]
pub fn start_point_exercise(canvas_id: Option<String>) -> Result<(), JsValue> {
    let canvas_id = canvas_id_or(canvas_id, POINT_CANVAS_ID);
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let seed = window
        .performance()
        .map(|p| seed_from_millis(p.now()))
        .unwrap_or(0);

    let session = Session::attach(&canvas_id, ProgramKind::UniformColor).map_err(to_js)?;
    let canvas = session.canvas().clone();
    let state = Rc::new(RefCell::new(PointSession {
        session,
        exercise: PointExercise::new(seed),
    }));
    state.borrow_mut().redraw().map_err(to_js)?;

    let mousedown = {
        let state = state.clone();
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move |ev: web_sys::MouseEvent| {
            let mut state = state.borrow_mut();
            let moved = state.exercise.click(
                ev.offset_x() as f32,
                ev.offset_y() as f32,
                canvas.width(),
                canvas.height(),
            );
            if let Err(e) = moved.and_then(|()| state.redraw()) {
                log::error!("point click: {e}");
            }
        }) as Box<dyn FnMut(_)>)
    };
    canvas.add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref())?;
    mousedown.forget();

    let keydown = {
        let state = state.clone();
        Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
            let mut state = state.borrow_mut();
            let scene = state.exercise.key_down(&ev.key());
            if let Err(e) = state.session.draw(&scene) {
                log::error!("point key: {e}");
            }
        }) as Box<dyn FnMut(_)>)
    };
    let body = window
        .document()
        .and_then(|d| d.body())
        .ok_or_else(|| JsValue::from_str("no document body"))?;
    body.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
    keydown.forget();

    log::info!("point exercise running on #{canvas_id}");
    Ok(())
}
