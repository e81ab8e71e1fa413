use web_sys::CanvasRenderingContext2d;

use crate::catcher::CatcherGame;
use crate::constants::*;
use crate::shooter::{ShooterGame, Weapon};

pub fn render_catcher_hud(ctx: &CanvasRenderingContext2d, game: &CatcherGame, high_score: u32) {
    ctx.set_fill_style_str("#5c3317");
    ctx.set_font("bold 20px monospace");
    let _ = ctx.fill_text(&format!("Score: {}", game.score), 15.0, 30.0);

    ctx.set_font("14px monospace");
    let _ = ctx.fill_text(&format!("Best: {}", high_score.max(game.score)), 15.0, 52.0);
}

pub fn render_shooter_hud(ctx: &CanvasRenderingContext2d, game: &ShooterGame, high_score: u32) {
    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("bold 20px monospace");
    let _ = ctx.fill_text(&format!("Score: {}", game.score), 15.0, 30.0);

    ctx.set_font("14px monospace");
    ctx.set_fill_style_str("#aaaacc");
    let _ = ctx.fill_text(&format!("Best: {}", high_score.max(game.score)), 15.0, 52.0);
    let _ = ctx.fill_text(&format!("Wave {}", game.wave), 15.0, 72.0);

    let weapon = match game.ship.weapon {
        Weapon::Basic => "Blaster",
        Weapon::Spread => "Spread",
        Weapon::Laser => "Laser",
        Weapon::Homing => "Homing",
    };
    let _ = ctx.fill_text(
        &format!("{} Lv{}", weapon, game.ship.weapon_level),
        15.0,
        92.0,
    );

    render_modifier_bars(ctx, game);

    if let Some((text, _)) = &game.banner {
        render_banner(ctx, text);
    }
}

/// Countdown bars for the timed pickups, stacked in the top-right corner.
fn render_modifier_bars(ctx: &CanvasRenderingContext2d, game: &ShooterGame) {
    let bars = [
        ("MULTI", &game.ship.multishot, MULTISHOT_FRAMES, "#ffff00"),
        ("SHIELD", &game.ship.shield, SHIELD_FRAMES, "#00ff00"),
        ("SPEED", &game.ship.speedup, SPEEDUP_FRAMES, "#ff00ff"),
    ];

    let mut y = 20.0;
    for (label, modifier, total, color) in bars {
        if !modifier.active {
            continue;
        }
        let frac = modifier.frames as f64 / total as f64;
        let x = CANVAS_W - 115.0;

        ctx.set_fill_style_str("rgba(0, 0, 0, 0.5)");
        ctx.fill_rect(x, y, 100.0, 8.0);
        ctx.set_fill_style_str(color);
        ctx.fill_rect(x, y, 100.0 * frac, 8.0);

        ctx.set_font("10px monospace");
        let _ = ctx.fill_text(label, x - 45.0, y + 8.0);
        y += 16.0;
    }
}

fn render_banner(ctx: &CanvasRenderingContext2d, text: &str) {
    ctx.set_font("bold 36px monospace");
    ctx.set_text_align("center");

    ctx.set_fill_style_str("rgba(0, 0, 0, 0.6)");
    let _ = ctx.fill_text(text, CANVAS_W / 2.0 + 2.0, CANVAS_H / 3.0 + 2.0);
    ctx.set_fill_style_str("#ffcc00");
    let _ = ctx.fill_text(text, CANVAS_W / 2.0, CANVAS_H / 3.0);

    ctx.set_text_align("left");
}
