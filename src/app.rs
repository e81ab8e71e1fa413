use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::audio::AudioManager;
use crate::state::{self, GameKind, Phase, SharedState};
use crate::{canvas, game_loop, highscore, input};

#[component]
pub fn App() -> impl IntoView {
    let game_state = state::new_shared_state(js_sys::Date::now() as u64);
    let audio = Rc::new(AudioManager::new());

    {
        let mut s = game_state.borrow_mut();
        s.catcher_high_score = highscore::load(GameKind::Catcher);
        s.shooter_high_score = highscore::load(GameKind::Shooter);
    }

    let phase_signal = RwSignal::new(Phase::Menu);

    // Wire up the canvas, listeners, and frame loop once mounted
    let state_for_mount = SendWrapper::new(game_state.clone());
    let audio_for_mount = SendWrapper::new(audio.clone());
    Effect::new(move |_| {
        let state = (*state_for_mount).clone();
        let audio = (*audio_for_mount).clone();

        canvas::resize();
        canvas::setup_resize_handler();
        input::setup_input(state.clone());
        setup_menu_shortcut(state.clone(), audio.clone(), phase_signal);
        game_loop::start_game_loop(state, audio, phase_signal);
    });

    view! {
        <canvas id="gameCanvas"></canvas>
        <Overlay state=game_state audio=audio phase=phase_signal />
    }
}

// Space on the menu restarts the last-played game, or the catcher on a
// fresh visit.
fn setup_menu_shortcut(state: SharedState, audio: Rc<AudioManager>, phase: RwSignal<Phase>) {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    let closure = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
        if e.key() != " " || state.borrow().phase != Phase::Menu {
            return;
        }
        e.prevent_default();
        let kind = {
            let mut s = state.borrow_mut();
            let kind = s
                .session
                .as_ref()
                .map(|sess| sess.kind())
                .unwrap_or(GameKind::Catcher);
            s.start(kind);
            kind
        };
        if kind == GameKind::Shooter {
            audio.play_music();
        }
        phase.set(Phase::Playing);
    }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

    let document = web_sys::window().unwrap().document().unwrap();
    let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[component]
fn Overlay(state: SharedState, audio: Rc<AudioManager>, phase: RwSignal<Phase>) -> impl IntoView {
    let state = SendWrapper::new(state);
    let audio = SendWrapper::new(audio);

    move || {
        let state = (*state).clone();
        let audio = (*audio).clone();
        match phase.get() {
            Phase::Menu => view! { <Menu state=state audio=audio phase=phase /> }.into_any(),
            Phase::Playing => view! { <></> }.into_any(),
            Phase::GameOver => {
                view! { <GameOver state=state audio=audio phase=phase /> }.into_any()
            }
        }
    }
}

#[component]
fn Menu(state: SharedState, audio: Rc<AudioManager>, phase: RwSignal<Phase>) -> impl IntoView {
    let (catcher_best, shooter_best) = {
        let s = state.borrow();
        (
            s.high_score(GameKind::Catcher),
            s.high_score(GameKind::Shooter),
        )
    };

    let audio = SendWrapper::new(audio);
    let start = {
        let state = SendWrapper::new(state);
        let audio = audio.clone();
        move |kind: GameKind| {
            state.borrow_mut().start(kind);
            if kind == GameKind::Shooter {
                audio.play_music();
            }
            phase.set(Phase::Playing);
        }
    };
    let start_catcher = start.clone();
    let start_shooter = start;

    let audio_for_sound = audio.clone();
    let audio_for_music = audio.clone();
    let audio_for_sound_vol = audio.clone();
    let audio_for_music_vol = audio;

    view! {
        <div class="overlay menu">
            <h1>"Arcade"</h1>
            <button class="btn-start" on:click=move |_| start_catcher(GameKind::Catcher)>
                {GameKind::Catcher.title()}
            </button>
            <p class="best">"Best: " {catcher_best}</p>
            <button class="btn-start" on:click=move |_| start_shooter(GameKind::Shooter)>
                {GameKind::Shooter.title()}
            </button>
            <p class="best">"Best: " {shooter_best}</p>
            <div class="audio-toggles">
                <button class="btn-toggle" on:click=move |_| audio_for_sound.toggle_sound()>
                    "Sound"
                </button>
                <button class="btn-toggle" on:click=move |_| audio_for_music.toggle_music()>
                    "Music"
                </button>
                <input
                    type="range"
                    min="0"
                    max="100"
                    value="70"
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                            audio_for_sound_vol.set_sound_volume(v / 100.0);
                        }
                    }
                />
                <input
                    type="range"
                    min="0"
                    max="100"
                    value="50"
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                            audio_for_music_vol.set_music_volume(v / 100.0);
                        }
                    }
                />
            </div>
            <p class="hint">"Arrows to move, Space to fire. Touch works too."</p>
        </div>
    }
}

#[component]
fn GameOver(state: SharedState, audio: Rc<AudioManager>, phase: RwSignal<Phase>) -> impl IntoView {
    let (kind, score, new_best) = {
        let s = state.borrow();
        let kind = s
            .session
            .as_ref()
            .map(|sess| sess.kind())
            .unwrap_or(GameKind::Catcher);
        (kind, s.session.as_ref().map_or(0, |sess| sess.score()), s.new_high_score)
    };

    // The banner celebrates for a moment, then gets out of the way
    let show_best = RwSignal::new(new_best);
    if new_best {
        gloo_timers::callback::Timeout::new(4000, move || show_best.set(false)).forget();
    }

    let play_again = {
        let state = SendWrapper::new(state);
        let audio = SendWrapper::new(audio);
        move |_| {
            state.borrow_mut().start(kind);
            if kind == GameKind::Shooter {
                audio.play_music();
            }
            phase.set(Phase::Playing);
        }
    };
    let to_menu = move |_| phase.set(Phase::Menu);

    view! {
        <div class="overlay game-over">
            <h1>"Game Over"</h1>
            <p class="final-score">{kind.title()} ": " {score}</p>
            {move || show_best.get().then(|| view! { <p class="new-best">"New High Score!"</p> })}
            <button class="btn-start" on:click=play_again>"Play Again"</button>
            <button class="btn-menu" on:click=to_menu>"Menu"</button>
        </div>
    }
}
