//! Space Shooter simulation.
//!
//! `ShooterGame` owns every entity collection for one session and steps them
//! once per frame. Headless like the catcher: randomness is injected and the
//! session clock advances by whatever `dt_ms` the caller supplies, so tests
//! run without real time. Side effects the shell cares about (sounds) come
//! out as queued events.

pub mod enemy;
pub mod powerups;
pub mod ship;

use rand::Rng;

use crate::collision::{overlaps_centered_inflated, point_in_box};
use crate::constants::*;
use crate::effects::{self, Particle};
use crate::state::Intents;

pub use enemy::{Enemy, EnemyKind, EnemyProjectile};
pub use powerups::{PowerUp, PowerUpKind};
pub use ship::{Modifier, Projectile, Ship, Weapon};

/// Things that happened this frame which the shell turns into sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Shot,
    Explosion,
    PowerUpCollected,
    PlayerHit,
    BossWarning,
    GameOver,
}

pub struct ShooterGame {
    pub ship: Ship,
    pub enemies: Vec<Enemy>,
    pub power_ups: Vec<PowerUp>,
    pub particles: Vec<Particle>,

    pub score: u32,
    pub wave: u32,
    pub enemies_defeated: u32,
    pub enemies_for_next_wave: u32,
    pub boss_active: bool,
    pub over: bool,

    /// Session clock in ms, advanced by the caller's dt.
    pub clock_ms: f64,
    last_spawn_ms: f64,
    pub frame: u64,
    pub flash_frames: u32,
    /// Wave/boss banner and the clock time at which it disappears.
    pub banner: Option<(String, f64)>,

    pub width: f64,
    pub height: f64,

    events: Vec<GameEvent>,
}

impl ShooterGame {
    pub fn new(width: f64, height: f64) -> Self {
        let mut game = Self {
            ship: Ship::new(width, height),
            enemies: Vec::new(),
            power_ups: Vec::new(),
            particles: Vec::new(),
            score: 0,
            wave: 1,
            enemies_defeated: 0,
            enemies_for_next_wave: ENEMIES_PER_WAVE,
            boss_active: false,
            over: false,
            clock_ms: 0.0,
            last_spawn_ms: 0.0,
            frame: 0,
            flash_frames: 0,
            banner: None,
            width,
            height,
            events: Vec::new(),
        };
        game.show_banner(format!("Wave {}", game.wave));
        game
    }

    /// Drain the frame's sound events.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance the simulation by one frame of `dt_ms` game time.
    pub fn update(&mut self, input: &Intents, dt_ms: f64, rng: &mut impl Rng) {
        if self.over {
            return;
        }
        self.frame += 1;
        self.clock_ms += dt_ms;

        // Player
        self.ship.tick_modifiers();
        self.ship.update_movement(input, self.width);
        if input.firing && self.ship.try_shoot(self.clock_ms) {
            self.events.push(GameEvent::Shot);
        }
        let targets: Vec<(f64, f64)> = self.enemies.iter().map(|e| (e.x, e.y)).collect();
        self.ship.update_projectiles(&targets, self.width, self.height);

        // Enemies
        self.spawn_enemies(rng);
        for enemy in &mut self.enemies {
            enemy.update_movement(self.width, self.height);
            enemy.try_shoot(self.clock_ms, rng);
            enemy.update_projectiles(self.width, self.height);
        }
        let h = self.height;
        self.enemies.retain(|e| !e.is_offscreen(h));

        // Collisions
        self.resolve_projectile_hits(rng);
        self.resolve_player_hits();
        self.resolve_pickups();

        // Power-up tokens
        if rng.gen_bool(POWERUP_AMBIENT_RATE) {
            let x = rng.gen_range(POWERUP_SIZE..self.width - POWERUP_SIZE);
            self.power_ups
                .push(PowerUp::new(x, -POWERUP_SIZE, PowerUpKind::random(rng)));
        }
        let h = self.height;
        self.power_ups.retain_mut(|p| p.update(h));

        // Wave gating: the defeat quota summons the boss
        if !self.boss_active && self.enemies_defeated >= self.enemies_for_next_wave {
            self.spawn_boss(rng);
        }

        effects::update_particles(&mut self.particles);
        self.flash_frames = self.flash_frames.saturating_sub(1);
        if let Some((_, until)) = self.banner {
            if self.clock_ms > until {
                self.banner = None;
            }
        }
    }

    fn show_banner(&mut self, text: String) {
        self.banner = Some((text, self.clock_ms + WAVE_BANNER_MS));
    }

    fn spawn_enemies(&mut self, rng: &mut impl Rng) {
        if self.boss_active
            || self.enemies.len() >= MAX_ENEMIES
            || self.clock_ms - self.last_spawn_ms < SPAWN_DELAY_MS
        {
            return;
        }
        self.last_spawn_ms = self.clock_ms;

        let kind = if rng.gen::<f64>() > 0.9 - self.wave as f64 * 0.05 {
            EnemyKind::Elite
        } else {
            EnemyKind::Basic
        };
        self.enemies
            .push(Enemy::spawn(kind, self.wave, self.width, self.clock_ms, rng));
    }

    fn spawn_boss(&mut self, rng: &mut impl Rng) {
        self.boss_active = true;
        self.enemies
            .push(Enemy::spawn(EnemyKind::Boss, self.wave, self.width, self.clock_ms, rng));
        self.show_banner("BOSS BATTLE!".to_string());
        self.events.push(GameEvent::BossWarning);
    }

    /// Player projectiles against enemies. A projectile that could overlap
    /// several enemies in the same frame damages only the first in iteration
    /// order.
    fn resolve_projectile_hits(&mut self, rng: &mut impl Rng) {
        let mut i = 0;
        while i < self.ship.projectiles.len() {
            let (px, py, damage) = {
                let p = &self.ship.projectiles[i];
                (p.x, p.y, p.damage)
            };

            let mut hit = false;
            for j in 0..self.enemies.len() {
                let e = &mut self.enemies[j];
                if point_in_box(px, py, e.x, e.y, e.w, e.h) {
                    hit = true;
                    if e.take_damage(damage) {
                        self.destroy_enemy(j, rng);
                    }
                    break;
                }
            }

            if hit {
                self.ship.projectiles.remove(i);
            } else {
                i += 1;
            }
        }
    }

    fn destroy_enemy(&mut self, index: usize, rng: &mut impl Rng) {
        let enemy = self.enemies.remove(index);
        self.score += enemy.points;
        self.enemies_defeated += 1;
        self.events.push(GameEvent::Explosion);
        effects::spawn_burst(&mut self.particles, rng, enemy.x, enemy.y, enemy.color, 10);

        if enemy.kind == EnemyKind::Boss {
            self.boss_active = false;
            // Boss defeat completes the wave
            for _ in 0..BOSS_DROP_COUNT {
                let x = enemy.x + (rng.gen::<f64>() - 0.5) * 50.0;
                self.power_ups
                    .push(PowerUp::new(x, enemy.y, PowerUpKind::random(rng)));
            }
            self.wave += 1;
            self.enemies_defeated = 0;
            self.enemies_for_next_wave += WAVE_QUOTA_STEP;
            self.show_banner(format!("Wave {}", self.wave));
        } else if rng.gen_bool(POWERUP_DROP_CHANCE) {
            self.power_ups
                .push(PowerUp::new(enemy.x, enemy.y, PowerUpKind::random(rng)));
        }
    }

    /// Enemy projectiles against the player. Shield absorbs hits outright;
    /// otherwise each hit costs points, and a penalty that lands the score on
    /// zero ends the session.
    fn resolve_player_hits(&mut self) {
        let ship = (self.ship.x, self.ship.y, self.ship.w, self.ship.h);
        let shielded = self.ship.shield.active;
        let mut hits = 0u32;

        for enemy in &mut self.enemies {
            enemy.projectiles.retain(|p| {
                if point_in_box(p.x, p.y, ship.0, ship.1, ship.2, ship.3) {
                    if !shielded {
                        hits += 1;
                    }
                    false
                } else {
                    true
                }
            });
        }

        for _ in 0..hits {
            if self.over {
                break;
            }
            self.score = self.score.saturating_sub(HIT_PENALTY);
            self.flash_frames = FLASH_FRAMES;
            self.events.push(GameEvent::PlayerHit);
            if self.score == 0 {
                self.over = true;
                self.events.push(GameEvent::GameOver);
            }
        }
    }

    fn resolve_pickups(&mut self) {
        let ship = (self.ship.x, self.ship.y, self.ship.w, self.ship.h);
        let mut collected = Vec::new();

        self.power_ups.retain(|p| {
            if overlaps_centered_inflated(ship.0, ship.1, ship.2, ship.3, p.x, p.y, p.w, p.h) {
                collected.push(p.kind);
                false
            } else {
                true
            }
        });

        for kind in collected {
            PowerUp::new(0.0, 0.0, kind).apply(&mut self.ship);
            self.events.push(GameEvent::PowerUpCollected);
        }
    }
}
