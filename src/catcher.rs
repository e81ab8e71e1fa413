//! Cookie Catcher simulation.
//!
//! Headless: all randomness comes through the injected RNG and the session is
//! stepped one frame at a time, so tests drive it directly.

use rand::Rng;

use crate::collision::{overlaps, Aabb};
use crate::constants::*;
use crate::effects::{self, Particle};
use crate::state::Intents;

#[derive(Debug, Clone)]
pub struct Basket {
    /// Top-left corner.
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Basket {
    fn new(canvas_w: f64, canvas_h: f64) -> Self {
        Self {
            x: canvas_w / 2.0 - BASKET_W / 2.0,
            y: canvas_h - BASKET_H - BASKET_BOTTOM_MARGIN,
            w: BASKET_W,
            h: BASKET_H,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.w, self.h)
    }
}

#[derive(Debug, Clone)]
pub struct Cookie {
    /// Top-left corner.
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// Base fall speed, scaled by the session's `game_speed`.
    pub speed: f64,
    pub burnt: bool,
}

impl Cookie {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.size, self.size)
    }
}

pub struct CatcherGame {
    pub basket: Basket,
    pub cookies: Vec<Cookie>,
    pub score: u32,
    pub game_speed: f64,
    pub frame: u64,
    pub over: bool,
    pub particles: Vec<Particle>,
    pub flash_frames: u32,
    pub width: f64,
    pub height: f64,
}

impl CatcherGame {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            basket: Basket::new(width, height),
            cookies: Vec::new(),
            score: 0,
            game_speed: 1.0,
            frame: 0,
            over: false,
            particles: Vec::new(),
            flash_frames: 0,
            width,
            height,
        }
    }

    /// Advance the simulation by one frame.
    pub fn update(&mut self, input: &Intents, rng: &mut impl Rng) {
        if self.over {
            return;
        }
        self.frame += 1;

        self.move_basket(input);
        self.spawn_cookies(rng);
        self.fall_cookies(rng);
        self.resolve_catches(rng);

        effects::update_particles(&mut self.particles);
        self.flash_frames = self.flash_frames.saturating_sub(1);

        // Difficulty scalar only ever grows
        self.game_speed += GAME_SPEED_INCREMENT;
    }

    fn move_basket(&mut self, input: &Intents) {
        if input.move_left && self.basket.x > 0.0 {
            self.basket.x -= BASKET_SPEED;
        }
        if input.move_right && self.basket.x < self.width - self.basket.w {
            self.basket.x += BASKET_SPEED;
        }
        self.basket.x = self.basket.x.clamp(0.0, self.width - self.basket.w);
    }

    fn spawn_cookies(&mut self, rng: &mut impl Rng) {
        if self.cookies.len() >= MAX_COOKIES || self.frame % COOKIE_SPAWN_INTERVAL != 0 {
            return;
        }
        self.cookies.push(Self::fresh_cookie(self.width, rng));
    }

    fn fresh_cookie(width: f64, rng: &mut impl Rng) -> Cookie {
        Cookie {
            x: rng.gen_range(0.0..width - COOKIE_SIZE),
            y: -COOKIE_SIZE,
            size: COOKIE_SIZE,
            speed: rng.gen_range(2.0..5.0),
            burnt: rng.gen_bool(BURNT_PROBABILITY),
        }
    }

    fn fall_cookies(&mut self, rng: &mut impl Rng) {
        let height = self.height;
        let width = self.width;
        let speed_scale = self.game_speed;
        for cookie in &mut self.cookies {
            cookie.y += cookie.speed * speed_scale;
            // Past the bottom: recycle back to the top instead of reallocating
            if cookie.y > height {
                *cookie = Self::fresh_cookie(width, rng);
            }
        }
    }

    fn resolve_catches(&mut self, rng: &mut impl Rng) {
        let basket = self.basket.bounds();
        let width = self.width;
        let mut caught: Vec<(f64, f64, bool)> = Vec::new();

        for cookie in &mut self.cookies {
            if overlaps(&basket, &cookie.bounds()) {
                caught.push((
                    cookie.x + cookie.size / 2.0,
                    cookie.y + cookie.size / 2.0,
                    cookie.burnt,
                ));
                *cookie = Self::fresh_cookie(width, rng);
            }
        }

        for (cx, cy, burnt) in caught {
            // A terminal penalty ends the frame; later catches don't count
            if self.over {
                break;
            }
            if burnt {
                self.score = self.score.saturating_sub(BURNT_PENALTY);
                self.flash_frames = FLASH_FRAMES;
                if self.score == 0 {
                    self.over = true;
                }
            } else {
                self.score += COOKIE_POINTS;
                effects::spawn_burst(&mut self.particles, rng, cx, cy, COOKIE_COLOR, 8);
            }
        }
    }
}
