//! Enemy tiers, wave scaling, and shot patterns.

use rand::Rng;

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Basic,
    Elite,
    Boss,
}

/// Per-tier parameters before wave scaling.
#[derive(Debug, Clone, Copy)]
pub struct EnemyStats {
    pub w: f64,
    pub h: f64,
    pub speed: f64,
    pub health: i32,
    pub shoot_delay_ms: f64,
    pub points: u32,
    pub color: &'static str,
}

impl EnemyKind {
    fn base_stats(self) -> EnemyStats {
        match self {
            EnemyKind::Basic => EnemyStats {
                w: 40.0,
                h: 40.0,
                speed: 4.0,
                health: 20,
                shoot_delay_ms: 2000.0,
                points: 50,
                color: "#ff0000",
            },
            EnemyKind::Elite => EnemyStats {
                w: 60.0,
                h: 50.0,
                speed: 3.0,
                health: 30,
                shoot_delay_ms: 1500.0,
                points: 100,
                color: "#ff9900",
            },
            EnemyKind::Boss => EnemyStats {
                w: 120.0,
                h: 100.0,
                speed: 2.0,
                health: 100,
                shoot_delay_ms: 1000.0,
                points: 500,
                color: "#ff4444",
            },
        }
    }

    /// Tier stats scaled by wave number. Bosses scale health multiplicatively;
    /// the rest gain health and lose cooldown linearly, floored at one shot
    /// per second.
    pub fn stats(self, wave: u32) -> EnemyStats {
        let mut stats = self.base_stats();
        if self == EnemyKind::Boss {
            stats.health *= wave as i32;
        } else {
            stats.health += (wave / 2) as i32;
            stats.shoot_delay_ms =
                (stats.shoot_delay_ms - wave as f64 * 100.0).max(ENEMY_SHOOT_FLOOR_MS);
        }
        stats
    }
}

#[derive(Debug, Clone)]
pub struct EnemyProjectile {
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
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// Center position.
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub w: f64,
    pub h: f64,
    pub health: i32,
    pub max_health: i32,
    pub speed: f64,
    pub shoot_delay_ms: f64,
    pub last_shot_ms: f64,
    pub points: u32,
    pub color: &'static str,
    pub projectiles: Vec<EnemyProjectile>,
}

impl Enemy {
    /// Spawn above the top edge with a random drift direction.
    pub fn spawn(kind: EnemyKind, wave: u32, canvas_w: f64, now_ms: f64, rng: &mut impl Rng) -> Self {
        let stats = kind.stats(wave);
        let x = rng.gen_range(stats.w / 2.0..canvas_w - stats.w / 2.0);
        Self {
            kind,
            x,
            y: -stats.h,
            dx: stats.speed * (rng.gen::<f64>() - 0.5),
            dy: stats.speed * 0.5,
            w: stats.w,
            h: stats.h,
            health: stats.health,
            max_health: stats.health,
            speed: stats.speed,
            shoot_delay_ms: stats.shoot_delay_ms,
            last_shot_ms: now_ms,
            points: stats.points,
            color: stats.color,
            projectiles: Vec::new(),
        }
    }

    /// One frame of movement: drift, wall bounce, boss parking.
    pub fn update_movement(&mut self, canvas_w: f64, canvas_h: f64) {
        self.x += self.dx;
        self.y += self.dy;

        if self.x < self.w / 2.0 || self.x > canvas_w - self.w / 2.0 {
            self.dx = -self.dx;
            self.x = self.x.clamp(self.w / 2.0, canvas_w - self.w / 2.0);
        }

        // The boss holds position near the top instead of drifting through
        if self.kind == EnemyKind::Boss && self.y > canvas_h * 0.2 {
            self.y = canvas_h * 0.2;
            self.dy = 0.0;
        }
    }

    /// Fire the tier's pattern when the cooldown has elapsed. Returns true if
    /// a volley was emitted.
    pub fn try_shoot(&mut self, now_ms: f64, rng: &mut impl Rng) -> bool {
        if now_ms - self.last_shot_ms < self.shoot_delay_ms {
            return false;
        }
        self.last_shot_ms = now_ms;
        match self.kind {
            EnemyKind::Basic => self.shoot_straight(),
            EnemyKind::Elite => self.shoot_fan(),
            // The boss picks a pattern at random every volley
            EnemyKind::Boss => match rng.gen_range(0..3) {
                0 => self.shoot_radial(),
                1 => self.shoot_spread(),
                _ => self.shoot_lasers(),
            },
        }
        true
    }

    fn shoot_straight(&mut self) {
        self.projectiles.push(EnemyProjectile {
            x: self.x,
            y: self.y + self.h / 2.0,
            vx: 0.0,
            vy: 5.0,
            w: 3.0,
            h: 10.0,
            damage: 10,
            color: self.color,
            laser: false,
        });
    }

    fn shoot_fan(&mut self) {
        for angle in [-30.0_f64, 0.0, 30.0] {
            let rad = angle.to_radians();
            self.projectiles.push(EnemyProjectile {
                x: self.x,
                y: self.y + self.h / 2.0,
                vx: rad.sin() * 5.0,
                vy: rad.cos() * 5.0,
                w: 4.0,
                h: 12.0,
                damage: 15,
                color: self.color,
                laser: false,
            });
        }
    }

    fn shoot_radial(&mut self) {
        for i in 0..8 {
            let angle = (i as f64 / 8.0) * std::f64::consts::PI * 2.0;
            self.projectiles.push(EnemyProjectile {
                x: self.x,
                y: self.y,
                vx: angle.cos() * 4.0,
                vy: angle.sin() * 4.0,
                w: 6.0,
                h: 6.0,
                damage: 20,
                color: "#ff0000",
                laser: false,
            });
        }
    }

    fn shoot_spread(&mut self) {
        for angle in [-45.0_f64, -30.0, -15.0, 0.0, 15.0, 30.0, 45.0] {
            let rad = angle.to_radians();
            self.projectiles.push(EnemyProjectile {
                x: self.x,
                y: self.y,
                vx: rad.sin() * 5.0,
                vy: rad.cos() * 5.0,
                w: 5.0,
                h: 15.0,
                damage: 25,
                color: self.color,
                laser: false,
            });
        }
    }

    fn shoot_lasers(&mut self) {
        for offset in [-self.w / 3.0, 0.0, self.w / 3.0] {
            self.projectiles.push(EnemyProjectile {
                x: self.x + offset,
                y: self.y + self.h / 2.0,
                vx: 0.0,
                vy: 7.0,
                w: 8.0,
                h: 20.0,
                damage: 30,
                color: "#ff0000",
                laser: true,
            });
        }
    }

    /// Step projectiles one frame and drop the ones that left the canvas.
    pub fn update_projectiles(&mut self, canvas_w: f64, canvas_h: f64) {
        for p in &mut self.projectiles {
            p.x += p.vx;
            p.y += p.vy;
        }
        self.projectiles
            .retain(|p| p.x > 0.0 && p.x < canvas_w && p.y > 0.0 && p.y < canvas_h);
    }

    /// Returns true exactly when this hit destroys the enemy.
    pub fn take_damage(&mut self, damage: u32) -> bool {
        self.health -= damage as i32;
        self.health <= 0
    }

    pub fn is_offscreen(&self, canvas_h: f64) -> bool {
        self.y > canvas_h + self.h
    }
}
