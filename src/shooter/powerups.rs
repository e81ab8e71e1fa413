//! Falling power-up tokens.
//!
//! Three kinds upgrade the weapon permanently for the session, three grant a
//! timed modifier on the ship. Tokens come from two sources: enemy death
//! drops and an ambient spawner rolled once per frame.

use rand::Rng;

use crate::constants::*;
use crate::shooter::ship::{Ship, Weapon};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    Spread,
    Laser,
    Homing,
    Multishot,
    Shield,
    Speedup,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 6] = [
        PowerUpKind::Spread,
        PowerUpKind::Laser,
        PowerUpKind::Homing,
        PowerUpKind::Multishot,
        PowerUpKind::Shield,
        PowerUpKind::Speedup,
    ];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn color(&self) -> &'static str {
        match self {
            PowerUpKind::Spread => "#ff00ff",
            PowerUpKind::Laser => "#ff0000",
            PowerUpKind::Homing => "#ffff00",
            PowerUpKind::Multishot => "#ff0",
            PowerUpKind::Shield => "#0f0",
            PowerUpKind::Speedup => "#f0f",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            PowerUpKind::Spread => "W",
            PowerUpKind::Laser => "L",
            PowerUpKind::Homing => "H",
            PowerUpKind::Multishot => "+",
            PowerUpKind::Shield => "S",
            PowerUpKind::Speedup => ">",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PowerUp {
    /// Center position.
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub kind: PowerUpKind,
    /// Spin for the token's draw transform only.
    pub angle: f64,
}

impl PowerUp {
    pub fn new(x: f64, y: f64, kind: PowerUpKind) -> Self {
        Self {
            x,
            y,
            w: POWERUP_SIZE,
            h: POWERUP_SIZE,
            kind,
            angle: 0.0,
        }
    }

    /// One frame of falling and spinning. Returns false once the token has
    /// left the bottom of the canvas.
    pub fn update(&mut self, canvas_h: f64) -> bool {
        self.y += POWERUP_FALL_SPEED;
        self.angle += POWERUP_SPIN;
        self.y < canvas_h + self.h
    }

    /// Apply this token's effect to the ship.
    pub fn apply(&self, ship: &mut Ship) {
        match self.kind {
            PowerUpKind::Spread => ship.upgrade_weapon(Weapon::Spread),
            PowerUpKind::Laser => ship.upgrade_weapon(Weapon::Laser),
            PowerUpKind::Homing => ship.upgrade_weapon(Weapon::Homing),
            PowerUpKind::Multishot => ship.multishot.trigger(MULTISHOT_FRAMES),
            PowerUpKind::Shield => ship.shield.trigger(SHIELD_FRAMES),
            PowerUpKind::Speedup => ship.speedup.trigger(SPEEDUP_FRAMES),
        }
    }
}
