use std::cell::RefCell;
use std::f64::consts::PI;

use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::canvas;
use crate::catcher::CatcherGame;
use crate::constants::*;
use crate::effects;
use crate::hud;
use crate::shooter::{Enemy, EnemyKind, PowerUp, ShooterGame};
use crate::state::{Session, SharedState};

thread_local! {
    static BASKET_IMAGE: RefCell<Option<HtmlImageElement>> = RefCell::new(None);
}

fn ensure_loaded() {
    BASKET_IMAGE.with(|img| {
        if img.borrow().is_none() {
            if let Ok(el) = HtmlImageElement::new() {
                el.set_src("img/basket.png");
                *img.borrow_mut() = Some(el);
            }
        }
    });
}

pub fn render(state: &SharedState) {
    ensure_loaded();

    let Some(ctx) = canvas::get_canvas_context("gameCanvas") else {
        return;
    };

    let s = state.borrow();
    match &s.session {
        Some(Session::Catcher(game)) => {
            render_catcher(&ctx, game);
            hud::render_catcher_hud(&ctx, game, s.catcher_high_score);
        }
        Some(Session::Shooter(game)) => {
            render_shooter(&ctx, game);
            hud::render_shooter_hud(&ctx, game, s.shooter_high_score);
        }
        None => render_idle(&ctx),
    }
}

fn render_idle(ctx: &CanvasRenderingContext2d) {
    ctx.set_fill_style_str("#0a0a1a");
    ctx.fill_rect(0.0, 0.0, CANVAS_W, CANVAS_H);
}

// --- Cookie Catcher ---

fn render_catcher(ctx: &CanvasRenderingContext2d, game: &CatcherGame) {
    // Kitchen backdrop
    let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, CANVAS_H);
    let _ = gradient.add_color_stop(0.0, "#fdf6e3");
    let _ = gradient.add_color_stop(1.0, "#f5deb3");
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, CANVAS_W, CANVAS_H);

    for cookie in &game.cookies {
        draw_cookie(ctx, cookie.x, cookie.y, cookie.size, cookie.burnt);
    }

    draw_basket(ctx, game.basket.x, game.basket.y, game.basket.w, game.basket.h);

    effects::render_particles(ctx, &game.particles);
    effects::render_flash(ctx, game.flash_frames, CANVAS_W, CANVAS_H);
}

fn draw_cookie(ctx: &CanvasRenderingContext2d, x: f64, y: f64, size: f64, burnt: bool) {
    let r = size / 2.0;
    let (cx, cy) = (x + r, y + r);

    ctx.begin_path();
    let _ = ctx.arc(cx, cy, r, 0.0, PI * 2.0);
    ctx.set_fill_style_str(if burnt { BURNT_COOKIE_COLOR } else { COOKIE_COLOR });
    ctx.fill();

    // Chocolate chips
    ctx.set_fill_style_str(if burnt { "#1a120a" } else { "#5c3317" });
    for (dx, dy) in [(-0.35, -0.2), (0.25, -0.35), (0.1, 0.3), (-0.15, 0.1)] {
        ctx.begin_path();
        let _ = ctx.arc(cx + dx * r, cy + dy * r, r * 0.15, 0.0, PI * 2.0);
        ctx.fill();
    }
}

fn draw_basket(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64) {
    let drew_image = BASKET_IMAGE.with(|img| {
        let img = img.borrow();
        match img.as_ref() {
            Some(el) if el.complete() && el.natural_width() > 0 => ctx
                .draw_image_with_html_image_element_and_dw_and_dh(el, x, y, w, h)
                .is_ok(),
            _ => false,
        }
    });

    if !drew_image {
        ctx.set_fill_style_str(BASKET_COLOR);
        ctx.fill_rect(x, y + h * 0.3, w, h * 0.7);
        // Weave lines
        ctx.set_stroke_style_str("#5c3317");
        for i in 1..4 {
            let ly = y + h * 0.3 + h * 0.7 * i as f64 / 4.0;
            ctx.begin_path();
            ctx.move_to(x, ly);
            ctx.line_to(x + w, ly);
            ctx.stroke();
        }
        // Rim
        ctx.set_fill_style_str("#5c3317");
        ctx.fill_rect(x - 4.0, y + h * 0.25, w + 8.0, 6.0);
    }
}

// --- Space Shooter ---

fn render_shooter(ctx: &CanvasRenderingContext2d, game: &ShooterGame) {
    ctx.set_fill_style_str("#05050f");
    ctx.fill_rect(0.0, 0.0, CANVAS_W, CANVAS_H);
    draw_stars(ctx, game.frame);

    for enemy in &game.enemies {
        draw_enemy(ctx, enemy);
        for p in &enemy.projectiles {
            ctx.set_fill_style_str(p.color);
            ctx.fill_rect(p.x - p.w / 2.0, p.y - p.h / 2.0, p.w, p.h);
        }
    }

    for p in &game.ship.projectiles {
        ctx.set_fill_style_str(p.color);
        ctx.fill_rect(p.x - p.w / 2.0, p.y - p.h / 2.0, p.w, p.h);
    }

    for power_up in &game.power_ups {
        draw_power_up(ctx, power_up);
    }

    draw_ship(ctx, game);

    effects::render_particles(ctx, &game.particles);
    effects::render_flash(ctx, game.flash_frames, CANVAS_W, CANVAS_H);
}

/// Cheap parallax: fixed pseudo-random star positions scrolled by frame count.
fn draw_stars(ctx: &CanvasRenderingContext2d, frame: u64) {
    ctx.set_fill_style_str("#8888aa");
    for i in 0..60u64 {
        let x = ((i * 97 + 31) % CANVAS_W as u64) as f64;
        let speed = 0.5 + (i % 3) as f64 * 0.5;
        let y = ((i * 61) as f64 + frame as f64 * speed) % CANVAS_H;
        let size = 1.0 + (i % 3) as f64 * 0.5;
        ctx.fill_rect(x, y, size, size);
    }
}

fn draw_ship(ctx: &CanvasRenderingContext2d, game: &ShooterGame) {
    let ship = &game.ship;
    let (x, y, w, h) = (ship.x, ship.y, ship.w, ship.h);

    ctx.save();
    let _ = ctx.translate(x, y);

    // Hull
    ctx.begin_path();
    ctx.move_to(0.0, -h / 2.0);
    ctx.line_to(-w / 2.0, h / 2.0);
    ctx.line_to(0.0, h / 4.0);
    ctx.line_to(w / 2.0, h / 2.0);
    ctx.close_path();
    ctx.set_fill_style_str(SHIP_COLOR);
    ctx.fill();

    // Engine glow, flickering with the frame counter
    let flame = 6.0 + (game.frame % 6) as f64;
    ctx.begin_path();
    ctx.move_to(-w / 6.0, h / 3.0);
    ctx.line_to(0.0, h / 2.0 + flame);
    ctx.line_to(w / 6.0, h / 3.0);
    ctx.close_path();
    ctx.set_fill_style_str("#ffaa33");
    ctx.fill();

    ctx.restore();

    if ship.shield.active {
        ctx.begin_path();
        let _ = ctx.arc(x, y, w.max(h) * 0.75, 0.0, PI * 2.0);
        ctx.set_stroke_style_str("rgba(0, 255, 128, 0.7)");
        ctx.set_line_width(3.0);
        ctx.stroke();
        ctx.set_line_width(1.0);
    }
}

fn draw_enemy(ctx: &CanvasRenderingContext2d, enemy: &Enemy) {
    let (x, y, w, h) = (enemy.x, enemy.y, enemy.w, enemy.h);

    ctx.save();
    let _ = ctx.translate(x, y);
    ctx.begin_path();
    match enemy.kind {
        EnemyKind::Basic => {
            // Inverted triangle
            ctx.move_to(0.0, h / 2.0);
            ctx.line_to(-w / 2.0, -h / 2.0);
            ctx.line_to(w / 2.0, -h / 2.0);
        }
        EnemyKind::Elite => {
            // Diamond
            ctx.move_to(0.0, h / 2.0);
            ctx.line_to(-w / 2.0, 0.0);
            ctx.line_to(0.0, -h / 2.0);
            ctx.line_to(w / 2.0, 0.0);
        }
        EnemyKind::Boss => {
            // Wide hull with sloped sides
            ctx.move_to(-w / 2.0, -h / 4.0);
            ctx.line_to(-w / 4.0, -h / 2.0);
            ctx.line_to(w / 4.0, -h / 2.0);
            ctx.line_to(w / 2.0, -h / 4.0);
            ctx.line_to(w / 3.0, h / 2.0);
            ctx.line_to(-w / 3.0, h / 2.0);
        }
    }
    ctx.close_path();
    ctx.set_fill_style_str(enemy.color);
    ctx.fill();
    ctx.restore();

    // Health bar for the tougher tiers once damaged
    if enemy.kind != EnemyKind::Basic && enemy.health < enemy.max_health {
        let bar_w = w;
        let bar_x = x - w / 2.0;
        let bar_y = y - h / 2.0 - 10.0;
        let frac = (enemy.health.max(0) as f64 / enemy.max_health as f64).clamp(0.0, 1.0);
        ctx.set_fill_style_str("rgba(0, 0, 0, 0.5)");
        ctx.fill_rect(bar_x, bar_y, bar_w, 5.0);
        ctx.set_fill_style_str(if frac > 0.3 { "#44ff44" } else { "#ff4444" });
        ctx.fill_rect(bar_x, bar_y, bar_w * frac, 5.0);
    }
}

fn draw_power_up(ctx: &CanvasRenderingContext2d, power_up: &PowerUp) {
    let r = power_up.w / 2.0;

    ctx.save();
    let _ = ctx.translate(power_up.x, power_up.y);
    let _ = ctx.rotate(power_up.angle);

    // Spinning hexagon token
    ctx.begin_path();
    for i in 0..6 {
        let a = PI / 3.0 * i as f64;
        let (px, py) = (r * a.cos(), r * a.sin());
        if i == 0 {
            ctx.move_to(px, py);
        } else {
            ctx.line_to(px, py);
        }
    }
    ctx.close_path();
    ctx.set_fill_style_str(power_up.kind.color());
    ctx.fill();
    ctx.set_stroke_style_str("#ffffff");
    ctx.stroke();
    ctx.restore();

    // Symbol stays upright
    ctx.set_fill_style_str("#000000");
    ctx.set_font("bold 14px monospace");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let _ = ctx.fill_text(power_up.kind.symbol(), power_up.x, power_up.y);
    ctx.set_text_align("left");
    ctx.set_text_baseline("alphabetic");
}
