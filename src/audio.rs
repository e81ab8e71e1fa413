use std::cell::Cell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAudioElement;

use crate::shooter::GameEvent;

const SOUND_VOLUME: f64 = 0.7;
const MUSIC_VOLUME: f64 = 0.5;

pub struct AudioManager {
    shoot: Option<HtmlAudioElement>,
    explosion: Option<HtmlAudioElement>,
    powerup: Option<HtmlAudioElement>,
    hit: Option<HtmlAudioElement>,
    game_over: Option<HtmlAudioElement>,
    music: Option<HtmlAudioElement>,
    sound_enabled: Cell<bool>,
    music_enabled: Cell<bool>,
    sound_volume: Cell<f64>,
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            shoot: load_sound("audio/laser-shoot.mp3", false),
            explosion: load_sound("audio/explosion.mp3", false),
            powerup: load_sound("audio/powerup.mp3", false),
            hit: load_sound("audio/hit.mp3", false),
            game_over: load_sound("audio/game-over.mp3", false),
            music: load_sound("audio/space-ambient.mp3", true),
            sound_enabled: Cell::new(true),
            music_enabled: Cell::new(true),
            sound_volume: Cell::new(SOUND_VOLUME),
        }
    }

    pub fn handle(&self, event: GameEvent) {
        match event {
            GameEvent::Shot => self.play(&self.shoot),
            GameEvent::Explosion | GameEvent::BossWarning => self.play(&self.explosion),
            GameEvent::PowerUpCollected => self.play(&self.powerup),
            GameEvent::PlayerHit => self.play(&self.hit),
            GameEvent::GameOver => self.play(&self.game_over),
        }
    }

    fn play(&self, sound: &Option<HtmlAudioElement>) {
        if !self.sound_enabled.get() {
            return;
        }
        let Some(sound) = sound else { return };
        // Clone so rapid-fire effects overlap instead of restarting
        let Ok(node) = sound.clone_node() else { return };
        let clone: HtmlAudioElement = node.unchecked_into();
        clone.set_volume(self.sound_volume.get());
        if let Ok(promise) = clone.play() {
            let swallow = Closure::wrap(Box::new(|_: JsValue| {}) as Box<dyn FnMut(JsValue)>);
            let _ = promise.catch(&swallow);
            swallow.forget();
        }
    }

    pub fn play_music(&self) {
        if !self.music_enabled.get() {
            return;
        }
        if let Some(music) = &self.music {
            if let Ok(promise) = music.play() {
                let swallow = Closure::wrap(Box::new(|_: JsValue| {}) as Box<dyn FnMut(JsValue)>);
                let _ = promise.catch(&swallow);
                swallow.forget();
            }
        }
    }

    pub fn pause_music(&self) {
        if let Some(music) = &self.music {
            let _ = music.pause();
        }
    }

    pub fn toggle_sound(&self) {
        self.sound_enabled.set(!self.sound_enabled.get());
    }

    pub fn toggle_music(&self) {
        self.music_enabled.set(!self.music_enabled.get());
        if self.music_enabled.get() {
            self.play_music();
        } else {
            self.pause_music();
        }
    }

    pub fn set_sound_volume(&self, volume: f64) {
        self.sound_volume.set(clamp_volume(volume));
    }

    pub fn set_music_volume(&self, volume: f64) {
        if let Some(music) = &self.music {
            music.set_volume(clamp_volume(volume));
        }
    }
}

fn clamp_volume(volume: f64) -> f64 {
    volume.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::clamp_volume;

    #[test]
    fn slider_values_stay_in_unit_range() {
        assert_eq!(clamp_volume(0.7), 0.7);
        assert_eq!(clamp_volume(-0.2), 0.0);
        assert_eq!(clamp_volume(1.5), 1.0);
    }
}

fn load_sound(src: &str, music: bool) -> Option<HtmlAudioElement> {
    match HtmlAudioElement::new_with_src(src) {
        Ok(audio) => {
            audio.set_loop(music);
            audio.set_volume(if music { MUSIC_VOLUME } else { SOUND_VOLUME });
            Some(audio)
        }
        Err(err) => {
            web_sys::console::warn_1(&err);
            None
        }
    }
}
