use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::audio::AudioManager;
use crate::constants::MAX_FRAME_DT_MS;
use crate::highscore;
use crate::renderer;
use crate::shooter::GameEvent;
use crate::state::{GameState, Phase, Session, SharedState};

pub fn start_game_loop(state: SharedState, audio: Rc<AudioManager>, phase_signal: RwSignal<Phase>) {
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    let last_time = Rc::new(RefCell::new(0.0_f64));

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let mut lt = last_time.borrow_mut();
        // A backgrounded tab comes back with a huge timestamp gap; cap it
        let dt_ms = (timestamp - *lt).min(MAX_FRAME_DT_MS);
        *lt = timestamp;
        drop(lt);

        step(&state, &audio, phase_signal, dt_ms);
        renderer::render(&state);

        let window = web_sys::window().unwrap();
        let _ = window
            .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }) as Box<dyn FnMut(f64)>));

    let window = web_sys::window().unwrap();
    let _ = window.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
}

fn step(state: &SharedState, audio: &AudioManager, phase_signal: RwSignal<Phase>, dt_ms: f64) {
    let mut s = state.borrow_mut();
    if s.phase != Phase::Playing {
        return;
    }

    let GameState {
        session,
        input,
        rng,
        ..
    } = &mut *s;
    let Some(session) = session else { return };

    match session {
        Session::Catcher(game) => {
            game.update(input, rng);
        }
        Session::Shooter(game) => {
            game.update(input, dt_ms, rng);
            for event in game.take_events() {
                audio.handle(event);
            }
        }
    }

    let over = session.is_over();
    let kind = session.kind();
    let score = session.score();

    if over {
        s.phase = Phase::GameOver;
        s.new_high_score = highscore::save_if_best(kind, score);
        if s.new_high_score {
            s.set_high_score(kind, score);
        }
        drop(s);

        // The catcher has no event queue; play its game-over sting here
        if kind == crate::state::GameKind::Catcher {
            audio.handle(GameEvent::GameOver);
        }
        audio.pause_music();
        phase_signal.set(Phase::GameOver);
    }
}
