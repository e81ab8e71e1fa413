//! Particle burst and screen flash effects.
//!
//! Update logic is pure so the sessions can run headless; only the render
//! functions touch the canvas.

use rand::Rng;
use web_sys::CanvasRenderingContext2d;

use crate::constants::MAX_PARTICLES;

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    /// Remaining life in [0, 1]; doubles as draw alpha.
    pub life: f64,
    pub color: &'static str,
}

/// Scatter a burst of particles around a point. The pool is capped; extra
/// requests are silently dropped.
pub fn spawn_burst(
    particles: &mut Vec<Particle>,
    rng: &mut impl Rng,
    x: f64,
    y: f64,
    color: &'static str,
    count: usize,
) {
    for _ in 0..count {
        if particles.len() >= MAX_PARTICLES {
            return;
        }
        particles.push(Particle {
            x,
            y,
            vx: rng.gen_range(-3.0..3.0),
            vy: rng.gen_range(-3.0..3.0),
            size: rng.gen_range(1.0..4.0),
            life: 1.0,
            color,
        });
    }
}

pub fn update_particles(particles: &mut Vec<Particle>) {
    for p in particles.iter_mut() {
        p.x += p.vx;
        p.y += p.vy;
        p.life -= 0.02;
    }
    particles.retain(|p| p.life > 0.0);
}

pub fn render_particles(ctx: &CanvasRenderingContext2d, particles: &[Particle]) {
    for p in particles {
        ctx.begin_path();
        let _ = ctx.arc(p.x, p.y, p.size, 0.0, std::f64::consts::PI * 2.0);
        ctx.set_fill_style_str(p.color);
        ctx.set_global_alpha(p.life.clamp(0.0, 1.0));
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);
}

/// Translucent red overlay while a penalty flash is active.
pub fn render_flash(ctx: &CanvasRenderingContext2d, flash_frames: u32, w: f64, h: f64) {
    if flash_frames > 0 {
        ctx.set_fill_style_str("rgba(255, 0, 0, 0.3)");
        ctx.fill_rect(0.0, 0.0, w, h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn burst_respects_pool_cap() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut particles = Vec::new();
        spawn_burst(&mut particles, &mut rng, 0.0, 0.0, "#fff", MAX_PARTICLES + 50);
        assert_eq!(particles.len(), MAX_PARTICLES);
    }

    #[test]
    fn particles_fade_out_and_expire() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut particles = Vec::new();
        spawn_burst(&mut particles, &mut rng, 0.0, 0.0, "#fff", 10);
        // life 1.0, -0.02 per frame: gone after 50 updates
        for _ in 0..50 {
            update_particles(&mut particles);
        }
        assert!(particles.is_empty());
    }

    #[test]
    fn particle_moves_by_its_velocity() {
        let mut particles = vec![Particle {
            x: 10.0,
            y: 10.0,
            vx: 2.0,
            vy: -1.0,
            size: 2.0,
            life: 1.0,
            color: "#fff",
        }];
        update_particles(&mut particles);
        assert_eq!(particles[0].x, 12.0);
        assert_eq!(particles[0].y, 9.0);
    }
}
