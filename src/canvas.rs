use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::constants::{CANVAS_H, CANVAS_W};

// The drawing surface keeps its logical size; CSS scales it down when the
// viewport is smaller.
pub fn resize() {
    let window = web_sys::window().unwrap();
    let w = window.inner_width().unwrap().as_f64().unwrap();
    let h = window.inner_height().unwrap().as_f64().unwrap();

    let document = window.document().unwrap();
    if let Some(canvas) = document.get_element_by_id("gameCanvas") {
        let canvas: HtmlCanvasElement = canvas.unchecked_into();
        canvas.set_width(CANVAS_W as u32);
        canvas.set_height(CANVAS_H as u32);

        let scale = (w / CANVAS_W).min(h / CANVAS_H).min(1.0);
        let style = canvas.style();
        let _ = style.set_property("width", &format!("{}px", CANVAS_W * scale));
        let _ = style.set_property("height", &format!("{}px", CANVAS_H * scale));
    }
}

pub fn setup_resize_handler() {
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        resize();
    }) as Box<dyn FnMut(web_sys::Event)>);

    let window = web_sys::window().unwrap();
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn get_canvas_context(id: &str) -> Option<web_sys::CanvasRenderingContext2d> {
    let document = web_sys::window()?.document()?;
    let canvas = document.get_element_by_id(id)?;
    let canvas: HtmlCanvasElement = canvas.unchecked_into();
    canvas
        .get_context("2d")
        .ok()?
        .map(|c| c.unchecked_into())
}
