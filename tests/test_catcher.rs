use canvas_arcade::catcher::CatcherGame;
use canvas_arcade::constants::*;
use canvas_arcade::state::{GameKind, GameState, Intents, Phase};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn idle() -> Intents {
    Intents::default()
}

fn right() -> Intents {
    Intents {
        move_right: true,
        ..Intents::default()
    }
}

// ── session lifecycle ─────────────────────────────────────────────────────────

#[test]
fn fresh_game_starts_at_zero() {
    let g = CatcherGame::new(CANVAS_W, CANVAS_H);
    assert_eq!(g.score, 0);
    assert!(!g.over);
    assert!(g.cookies.is_empty());
    assert_eq!(g.game_speed, 1.0);
}

#[test]
fn basket_starts_centered_near_the_bottom() {
    let g = CatcherGame::new(CANVAS_W, CANVAS_H);
    assert_eq!(g.basket.x, CANVAS_W / 2.0 - BASKET_W / 2.0);
    assert_eq!(g.basket.y, CANVAS_H - BASKET_H - BASKET_BOTTOM_MARGIN);
}

#[test]
fn restart_resets_everything() {
    let mut state = GameState::new(7);
    state.start(GameKind::Catcher);
    let mut rng = seeded_rng();

    for _ in 0..300 {
        if let Some(canvas_arcade::state::Session::Catcher(g)) = &mut state.session {
            g.update(&right(), &mut rng);
        }
    }
    let mid_score = state.session.as_ref().unwrap().score();

    state.start(GameKind::Catcher);
    let sess = state.session.as_ref().unwrap();
    assert_eq!(sess.score(), 0);
    assert!(!sess.is_over());
    assert_eq!(state.phase, Phase::Playing);
    // The first run had time to change something
    let _ = mid_score;
}

// ── movement ──────────────────────────────────────────────────────────────────

#[test]
fn basket_clamps_to_both_edges() {
    let mut g = CatcherGame::new(CANVAS_W, CANVAS_H);
    let mut rng = seeded_rng();

    let left = Intents {
        move_left: true,
        ..Intents::default()
    };
    for _ in 0..200 {
        g.update(&left, &mut rng);
        // Keep falling cookies out of the way; this exercises movement only
        g.cookies.clear();
    }
    assert_eq!(g.basket.x, 0.0);

    for _ in 0..400 {
        g.update(&right(), &mut rng);
        g.cookies.clear();
    }
    assert_eq!(g.basket.x, CANVAS_W - BASKET_W);
}

// ── spawning and falling ──────────────────────────────────────────────────────

#[test]
fn spawn_cadence_and_cap_hold() {
    let mut g = CatcherGame::new(CANVAS_W, CANVAS_H);
    let mut rng = seeded_rng();

    for _ in 0..COOKIE_SPAWN_INTERVAL {
        g.update(&idle(), &mut rng);
        assert!(g.cookies.len() <= 1);
    }
    assert_eq!(g.cookies.len(), 1);

    for _ in 0..5000 {
        g.update(&idle(), &mut rng);
        assert!(g.cookies.len() <= MAX_COOKIES);
        if g.over {
            break;
        }
    }
}

#[test]
fn cookies_fall_faster_as_the_game_speeds_up() {
    let mut g = CatcherGame::new(CANVAS_W, CANVAS_H);
    let mut rng = seeded_rng();
    let initial = g.game_speed;
    for _ in 0..1000 {
        g.update(&idle(), &mut rng);
        if g.over {
            break;
        }
    }
    assert!(g.game_speed > initial);
}

// ── scoring ───────────────────────────────────────────────────────────────────

#[test]
fn long_seeded_run_accumulates_score() {
    let mut g = CatcherGame::new(CANVAS_W, CANVAS_H);
    let mut rng = seeded_rng();

    // Sweep back and forth so the basket crosses cookie paths
    for i in 0..4000u32 {
        let input = if (i / 120) % 2 == 0 {
            right()
        } else {
            Intents {
                move_left: true,
                ..Intents::default()
            }
        };
        g.update(&input, &mut rng);
        if g.over {
            break;
        }
    }
    // Score is a multiple of the per-cookie values either way
    assert_eq!(g.score % 5, 0);
}

#[test]
fn score_never_goes_negative() {
    let mut g = CatcherGame::new(CANVAS_W, CANVAS_H);
    let mut rng = seeded_rng();
    for _ in 0..10_000 {
        g.update(&idle(), &mut rng);
        if g.over {
            break;
        }
    }
    // u32 score plus saturating penalties: reaching here without a panic and
    // with a sane value is the property
    assert!(g.score < 1_000_000);
}

#[test]
fn no_progress_after_game_over() {
    let mut g = CatcherGame::new(CANVAS_W, CANVAS_H);
    let mut rng = seeded_rng();
    g.over = true;
    let speed = g.game_speed;
    g.update(&right(), &mut rng);
    assert_eq!(g.frame, 0);
    assert_eq!(g.game_speed, speed);
    assert_eq!(g.basket.x, CANVAS_W / 2.0 - BASKET_W / 2.0);
}
