use canvas_arcade::constants::*;
use canvas_arcade::shooter::{
    Enemy, EnemyKind, GameEvent, PowerUp, PowerUpKind, ShooterGame, Weapon,
};
use canvas_arcade::state::{GameKind, GameState, Intents, Phase, Session};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn idle() -> Intents {
    Intents::default()
}

fn firing() -> Intents {
    Intents {
        firing: true,
        ..Intents::default()
    }
}

// ── session lifecycle ─────────────────────────────────────────────────────────

#[test]
fn fresh_session_shows_the_first_wave_banner() {
    let g = ShooterGame::new(CANVAS_W, CANVAS_H);
    assert_eq!(g.wave, 1);
    assert_eq!(g.banner.as_ref().map(|(t, _)| t.as_str()), Some("Wave 1"));
    assert_eq!(g.ship.weapon, Weapon::Basic);
    assert_eq!(g.ship.weapon_level, 1);
}

#[test]
fn restart_resets_weapons_and_wave() {
    let mut state = GameState::new(3);
    state.start(GameKind::Shooter);
    if let Some(Session::Shooter(g)) = &mut state.session {
        g.wave = 4;
        g.score = 900;
        g.ship.upgrade_weapon(Weapon::Laser);
    }

    state.start(GameKind::Shooter);
    let Some(Session::Shooter(g)) = &state.session else {
        panic!("expected a shooter session");
    };
    assert_eq!(g.wave, 1);
    assert_eq!(g.score, 0);
    assert_eq!(g.ship.weapon, Weapon::Basic);
    assert_eq!(state.phase, Phase::Playing);
}

// ── firing ────────────────────────────────────────────────────────────────────

#[test]
fn holding_fire_respects_the_cooldown() {
    let mut g = ShooterGame::new(CANVAS_W, CANVAS_H);
    let mut rng = seeded_rng();

    // 20 frames at 16ms is 320ms, enough for exactly two shots at 250ms delay
    for _ in 0..20 {
        g.update(&firing(), 16.0, &mut rng);
    }
    let shots = g
        .take_events()
        .iter()
        .filter(|e| **e == GameEvent::Shot)
        .count();
    assert_eq!(shots, 2);
}

#[test]
fn spawned_enemies_obey_the_cap() {
    let mut g = ShooterGame::new(CANVAS_W, CANVAS_H);
    let mut rng = seeded_rng();

    for _ in 0..1500 {
        g.update(&idle(), 16.0, &mut rng);
        let non_boss = g
            .enemies
            .iter()
            .filter(|e| e.kind != EnemyKind::Boss)
            .count();
        assert!(non_boss <= MAX_ENEMIES);
        if g.over {
            break;
        }
    }
}

// ── waves ─────────────────────────────────────────────────────────────────────

#[test]
fn defeat_quota_summons_a_boss_and_halts_spawning() {
    let mut g = ShooterGame::new(CANVAS_W, CANVAS_H);
    let mut rng = seeded_rng();

    g.enemies_defeated = ENEMIES_PER_WAVE;
    g.update(&idle(), 16.0, &mut rng);
    assert!(g.boss_active);
    assert_eq!(
        g.enemies.iter().filter(|e| e.kind == EnemyKind::Boss).count(),
        1
    );

    // No regular reinforcements arrive while the boss lives
    let before = g.enemies.len();
    for _ in 0..400 {
        g.update(&idle(), 16.0, &mut rng);
        if g.over {
            return;
        }
    }
    assert!(g.enemies.len() <= before);
}

#[test]
fn boss_scales_with_the_wave_number() {
    let mut rng = seeded_rng();
    let w1 = Enemy::spawn(EnemyKind::Boss, 1, CANVAS_W, 0.0, &mut rng);
    let w3 = Enemy::spawn(EnemyKind::Boss, 3, CANVAS_W, 0.0, &mut rng);
    assert_eq!(w3.max_health, w1.max_health * 3);
}

// ── power-ups ─────────────────────────────────────────────────────────────────

#[test]
fn weapon_pickup_upgrades_and_levels() {
    let mut g = ShooterGame::new(CANVAS_W, CANVAS_H);

    g.power_ups
        .push(PowerUp::new(g.ship.x, g.ship.y, PowerUpKind::Spread));
    g.update(&idle(), 16.0, &mut seeded_rng());
    assert_eq!(g.ship.weapon, Weapon::Spread);

    // A second copy of the same weapon raises its level instead
    let level = g.ship.weapon_level;
    g.power_ups
        .push(PowerUp::new(g.ship.x, g.ship.y, PowerUpKind::Spread));
    g.update(&idle(), 16.0, &mut seeded_rng());
    assert_eq!(g.ship.weapon_level, level + 1);
}

#[test]
fn shield_wears_off_after_its_countdown() {
    let mut g = ShooterGame::new(CANVAS_W, CANVAS_H);
    let mut rng = seeded_rng();

    g.ship.shield.trigger(SHIELD_FRAMES);
    for _ in 0..(SHIELD_FRAMES + 2) {
        g.update(&idle(), 16.0, &mut rng);
        // Keep the field clear so nothing else interferes
        g.enemies.clear();
        g.power_ups.clear();
        if g.over {
            panic!("session should survive with no enemies");
        }
    }
    assert!(!g.ship.shield.active);
}

#[test]
fn speedup_makes_the_ship_faster_until_it_expires() {
    let mut g = ShooterGame::new(CANVAS_W, CANVAS_H);
    assert_eq!(g.ship.speed(), SHIP_SPEED);
    g.ship.speedup.trigger(SPEEDUP_FRAMES);
    assert_eq!(g.ship.speed(), SHIP_SPEEDUP_SPEED);
}

// ── damage ────────────────────────────────────────────────────────────────────

#[test]
fn unshielded_hit_at_zero_score_ends_the_session() {
    let mut g = ShooterGame::new(CANVAS_W, CANVAS_H);
    let mut rng = seeded_rng();

    let mut e = Enemy::spawn(EnemyKind::Basic, 1, CANVAS_W, 0.0, &mut rng);
    e.x = g.ship.x;
    e.y = g.ship.y - 200.0;
    // Aim one shot straight down through the ship
    e.projectiles.push(canvas_arcade::shooter::EnemyProjectile {
        x: g.ship.x,
        y: g.ship.y,
        vx: 0.0,
        vy: 0.0,
        w: 3.0,
        h: 10.0,
        damage: 10,
        color: "#ff0000",
        laser: false,
    });
    g.enemies.push(e);

    g.update(&idle(), 16.0, &mut rng);
    assert!(g.over);
    assert!(g.take_events().contains(&GameEvent::GameOver));
}

#[test]
fn hit_penalty_floors_at_zero() {
    let mut g = ShooterGame::new(CANVAS_W, CANVAS_H);
    let mut rng = seeded_rng();
    g.score = HIT_PENALTY - 10;

    let mut e = Enemy::spawn(EnemyKind::Basic, 1, CANVAS_W, 0.0, &mut rng);
    e.projectiles.push(canvas_arcade::shooter::EnemyProjectile {
        x: g.ship.x,
        y: g.ship.y,
        vx: 0.0,
        vy: 0.0,
        w: 3.0,
        h: 10.0,
        damage: 10,
        color: "#ff0000",
        laser: false,
    });
    g.enemies.push(e);

    g.update(&idle(), 16.0, &mut rng);
    assert_eq!(g.score, 0);
    assert!(g.over);
}
