use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, TouchEvent};

use crate::state::{Phase, SharedState};

pub fn setup_input(state: SharedState) {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();

    // Key down
    let state_kd = state.clone();
    let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        let mut s = state_kd.borrow_mut();
        if s.phase != Phase::Playing {
            return;
        }
        match e.key().as_str() {
            "ArrowLeft" => {
                e.prevent_default();
                s.input.move_left = true;
            }
            "ArrowRight" => {
                e.prevent_default();
                s.input.move_right = true;
            }
            " " => {
                e.prevent_default();
                s.input.firing = true;
            }
            _ => {}
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    let _ = document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    keydown.forget();

    // Key up
    let state_ku = state.clone();
    let keyup = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        let mut s = state_ku.borrow_mut();
        match e.key().as_str() {
            "ArrowLeft" => s.input.move_left = false,
            "ArrowRight" => s.input.move_right = false,
            " " => s.input.firing = false,
            _ => {}
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    let _ = document.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref());
    keyup.forget();

    let canvas = match document.get_element_by_id("gameCanvas") {
        Some(c) => c,
        None => return,
    };

    setup_touch_input(state, &canvas);
}

// Left half of the canvas steers left, right half steers right, any touch
// holds the trigger down.
fn setup_touch_input(state: SharedState, canvas: &web_sys::Element) {
    let opts = web_sys::AddEventListenerOptions::new();
    opts.set_passive(false);

    let state_ts = state.clone();
    let touchstart = Closure::wrap(Box::new(move |e: TouchEvent| {
        e.prevent_default();
        apply_touch(&state_ts, &e);
    }) as Box<dyn FnMut(TouchEvent)>);
    let _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        touchstart.as_ref().unchecked_ref(),
        &opts,
    );
    touchstart.forget();

    let state_tm = state.clone();
    let touchmove = Closure::wrap(Box::new(move |e: TouchEvent| {
        e.prevent_default();
        apply_touch(&state_tm, &e);
    }) as Box<dyn FnMut(TouchEvent)>);
    let _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        touchmove.as_ref().unchecked_ref(),
        &opts,
    );
    touchmove.forget();

    let state_te = state.clone();
    let touchend = Closure::wrap(Box::new(move |e: TouchEvent| {
        e.prevent_default();
        if e.touches().length() == 0 {
            state_te.borrow_mut().input.clear();
        } else {
            apply_touch(&state_te, &e);
        }
    }) as Box<dyn FnMut(TouchEvent)>);
    let _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
        "touchend",
        touchend.as_ref().unchecked_ref(),
        &opts,
    );
    // The browser can cancel a touch sequence mid-gesture; drop any held
    // intents so the basket or ship doesn't keep drifting.
    let state_tc = state;
    let touchcancel = Closure::wrap(Box::new(move |e: TouchEvent| {
        e.prevent_default();
        state_tc.borrow_mut().input.clear();
    }) as Box<dyn FnMut(TouchEvent)>);
    let _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
        "touchcancel",
        touchcancel.as_ref().unchecked_ref(),
        &opts,
    );
    touchend.forget();
    touchcancel.forget();
}

fn apply_touch(state: &SharedState, e: &TouchEvent) {
    let document = web_sys::window().unwrap().document().unwrap();
    let Some(canvas) = document.get_element_by_id("gameCanvas") else {
        return;
    };
    let rect = canvas.get_bounding_client_rect();
    let mid = rect.left() + rect.width() / 2.0;

    let mut s = state.borrow_mut();
    if s.phase != Phase::Playing {
        return;
    }
    s.input.move_left = false;
    s.input.move_right = false;

    let touches = e.touches();
    for i in 0..touches.length() {
        if let Some(touch) = touches.get(i) {
            if (touch.client_x() as f64) < mid {
                s.input.move_left = true;
            } else {
                s.input.move_right = true;
            }
        }
    }
    s.input.firing = touches.length() > 0;
}
