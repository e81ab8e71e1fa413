//! The player ship: movement, weapons, and timed power-up modifiers.

use crate::constants::*;
use crate::state::Intents;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weapon {
    Basic,
    Spread,
    Laser,
    Homing,
}

#[derive(Debug, Clone)]
pub struct Projectile {
    /// Center position.
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub w: f64,
    pub h: f64,
    pub damage: u32,
    pub color: &'static str,
    pub laser: bool,
    pub homing: bool,
}

/// A timed boolean modifier granted by a power-up. The flag stays set while
/// the countdown runs and clears on the frame after it reaches zero;
/// re-pickup restarts the full countdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifier {
    pub active: bool,
    pub frames: u32,
}

impl Modifier {
    pub fn trigger(&mut self, frames: u32) {
        self.active = true;
        self.frames = frames;
    }

    pub fn tick(&mut self) {
        if self.active {
            if self.frames > 0 {
                self.frames -= 1;
            } else {
                self.active = false;
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ship {
    /// Center position.
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub dx: f64,

    pub weapon: Weapon,
    pub weapon_level: u32,
    pub shoot_delay_ms: f64,
    last_shot_ms: f64,
    pub projectiles: Vec<Projectile>,

    pub multishot: Modifier,
    pub shield: Modifier,
    pub speedup: Modifier,
}

impl Ship {
    pub fn new(canvas_w: f64, canvas_h: f64) -> Self {
        Self {
            x: canvas_w / 2.0,
            y: canvas_h - SHIP_H - SHIP_BOTTOM_MARGIN,
            w: SHIP_W,
            h: SHIP_H,
            dx: 0.0,
            weapon: Weapon::Basic,
            weapon_level: 1,
            shoot_delay_ms: SHOOT_DELAY_MS,
            last_shot_ms: -SHOOT_DELAY_MS,
            projectiles: Vec::new(),
            multishot: Modifier::default(),
            shield: Modifier::default(),
            speedup: Modifier::default(),
        }
    }

    pub fn speed(&self) -> f64 {
        if self.speedup.active {
            SHIP_SPEEDUP_SPEED
        } else {
            SHIP_SPEED
        }
    }

    /// Apply movement intents and keep the ship on screen.
    pub fn update_movement(&mut self, input: &Intents, canvas_w: f64) {
        self.dx = match (input.move_left, input.move_right) {
            (true, false) => -self.speed(),
            (false, true) => self.speed(),
            _ => 0.0,
        };
        self.x += self.dx;
        self.x = self.x.clamp(self.w / 2.0, canvas_w - self.w / 2.0);
    }

    /// Decrement timed modifiers.
    pub fn tick_modifiers(&mut self) {
        self.multishot.tick();
        self.shield.tick();
        self.speedup.tick();
    }

    /// Fire if the cooldown has elapsed. Returns true when a volley left the
    /// barrel (so the caller can play the shot sound).
    pub fn try_shoot(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_shot_ms < self.shoot_delay_ms {
            return false;
        }
        self.last_shot_ms = now_ms;

        let nose_y = self.y - self.h / 2.0;
        match self.weapon {
            Weapon::Basic => self.push_basic(self.x, nose_y),
            Weapon::Spread => {
                for angle in [-15.0_f64, 0.0, 15.0] {
                    let rad = angle.to_radians();
                    self.projectiles.push(Projectile {
                        x: self.x,
                        y: nose_y,
                        vx: rad.sin() * 5.0,
                        vy: -rad.cos() * 10.0,
                        w: 3.0,
                        h: 15.0,
                        damage: 8 * self.weapon_level,
                        color: "#ff00ff",
                        laser: false,
                        homing: false,
                    });
                }
            }
            Weapon::Laser => self.projectiles.push(Projectile {
                x: self.x,
                y: nose_y,
                vx: 0.0,
                vy: -15.0,
                w: 5.0,
                h: 30.0,
                damage: 15 * self.weapon_level,
                color: "#ff0000",
                laser: true,
                homing: false,
            }),
            Weapon::Homing => self.projectiles.push(Projectile {
                x: self.x,
                y: nose_y,
                vx: 0.0,
                vy: -8.0,
                w: 8.0,
                h: 8.0,
                damage: 12 * self.weapon_level,
                color: "#ffff00",
                laser: false,
                homing: true,
            }),
        }

        // Multishot adds two flanking basic bolts regardless of weapon type
        if self.multishot.active {
            self.push_basic(self.x - self.w / 2.0, nose_y);
            self.push_basic(self.x + self.w / 2.0, nose_y);
        }
        true
    }

    fn push_basic(&mut self, x: f64, y: f64) {
        self.projectiles.push(Projectile {
            x,
            y,
            vx: 0.0,
            vy: -10.0,
            w: 3.0,
            h: 15.0,
            damage: 10 * self.weapon_level,
            color: PLAYER_BOLT_COLOR,
            laser: false,
            homing: false,
        });
    }

    /// Step projectiles one frame and drop the ones that left the canvas.
    /// Homing bolts steer their horizontal velocity toward the nearest of
    /// `targets` (enemy centers).
    pub fn update_projectiles(&mut self, targets: &[(f64, f64)], canvas_w: f64, canvas_h: f64) {
        for p in &mut self.projectiles {
            if p.homing {
                if let Some((tx, _)) = targets
                    .iter()
                    .min_by(|a, b| {
                        let da = (a.0 - p.x).hypot(a.1 - p.y);
                        let db = (b.0 - p.x).hypot(b.1 - p.y);
                        da.total_cmp(&db)
                    })
                    .copied()
                {
                    let steer = (tx - p.x).clamp(-0.5, 0.5);
                    p.vx = (p.vx + steer).clamp(-3.0, 3.0);
                }
            }
            p.x += p.vx;
            p.y += p.vy;
        }
        self.projectiles
            .retain(|p| p.y > -p.h && p.x > -p.w && p.x < canvas_w + p.w && p.y < canvas_h + p.h);
    }

    /// Switch to `weapon` and raise the level, tightening the fire cooldown.
    pub fn upgrade_weapon(&mut self, weapon: Weapon) {
        self.weapon = weapon;
        self.weapon_level = (self.weapon_level + 1).min(MAX_WEAPON_LEVEL);
        self.shoot_delay_ms = (self.shoot_delay_ms - SHOOT_DELAY_STEP_MS).max(SHOOT_DELAY_FLOOR_MS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship() -> Ship {
        Ship::new(CANVAS_W, CANVAS_H)
    }

    #[test]
    fn ship_clamped_to_canvas() {
        let mut s = ship();
        s.x = s.w / 2.0 + 1.0;
        let input = Intents { move_left: true, ..Intents::default() };
        for _ in 0..10 {
            s.update_movement(&input, CANVAS_W);
        }
        assert_eq!(s.x, s.w / 2.0);
    }

    #[test]
    fn shoot_respects_cooldown() {
        let mut s = ship();
        assert!(s.try_shoot(0.0));
        assert!(!s.try_shoot(100.0));
        assert!(s.try_shoot(SHOOT_DELAY_MS));
        assert_eq!(s.projectiles.len(), 2);
    }

    #[test]
    fn spread_fires_three_bolts() {
        let mut s = ship();
        s.weapon = Weapon::Spread;
        s.try_shoot(0.0);
        assert_eq!(s.projectiles.len(), 3);
        // Fan: left, straight, right
        assert!(s.projectiles[0].vx < 0.0);
        assert_eq!(s.projectiles[1].vx, 0.0);
        assert!(s.projectiles[2].vx > 0.0);
        for p in &s.projectiles {
            assert!(p.vy < 0.0);
        }
    }

    #[test]
    fn multishot_adds_flanking_bolts() {
        let mut s = ship();
        s.multishot.trigger(MULTISHOT_FRAMES);
        s.try_shoot(0.0);
        assert_eq!(s.projectiles.len(), 3);
    }

    #[test]
    fn modifier_expires_one_frame_after_countdown() {
        let mut m = Modifier::default();
        m.trigger(3);
        for _ in 0..3 {
            m.tick();
            assert!(m.active);
        }
        assert_eq!(m.frames, 0);
        m.tick();
        assert!(!m.active);
    }

    #[test]
    fn repeat_pickup_retriggers_timer() {
        let mut m = Modifier::default();
        m.trigger(10);
        for _ in 0..8 {
            m.tick();
        }
        m.trigger(10);
        assert_eq!(m.frames, 10);
        assert!(m.active);
    }

    #[test]
    fn upgrade_caps_level_and_floors_delay() {
        let mut s = ship();
        for _ in 0..10 {
            s.upgrade_weapon(Weapon::Laser);
        }
        assert_eq!(s.weapon_level, MAX_WEAPON_LEVEL);
        assert!(s.shoot_delay_ms >= SHOOT_DELAY_FLOOR_MS);
        assert_eq!(s.weapon, Weapon::Laser);
    }

    #[test]
    fn projectiles_culled_offscreen() {
        let mut s = ship();
        s.projectiles.push(Projectile {
            x: 100.0,
            y: -20.0,
            vx: 0.0,
            vy: -10.0,
            w: 3.0,
            h: 15.0,
            damage: 10,
            color: PLAYER_BOLT_COLOR,
            laser: false,
            homing: false,
        });
        s.update_projectiles(&[], CANVAS_W, CANVAS_H);
        assert!(s.projectiles.is_empty());
    }

    #[test]
    fn projectile_moves_one_frame_of_velocity() {
        let mut s = ship();
        s.try_shoot(0.0);
        let y0 = s.projectiles[0].y;
        s.update_projectiles(&[], CANVAS_W, CANVAS_H);
        assert_eq!(s.projectiles[0].y, y0 - 10.0);
        assert!(s.projectiles[0].x.is_finite());
    }

    #[test]
    fn homing_bolt_steers_toward_target() {
        let mut s = ship();
        s.weapon = Weapon::Homing;
        s.try_shoot(0.0);
        let x0 = s.projectiles[0].x;
        for _ in 0..20 {
            s.update_projectiles(&[(x0 + 200.0, 100.0)], CANVAS_W, CANVAS_H);
        }
        assert!(s.projectiles[0].x > x0);
    }
}
