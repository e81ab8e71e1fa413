// Game constants shared by both arcade games

pub const CANVAS_W: f64 = 800.0;
pub const CANVAS_H: f64 = 600.0;

// Frame pacing
pub const MAX_FRAME_DT_MS: f64 = 50.0;

// Cookie Catcher
pub const BASKET_W: f64 = 80.0;
pub const BASKET_H: f64 = 60.0;
pub const BASKET_SPEED: f64 = 8.0;
pub const BASKET_BOTTOM_MARGIN: f64 = 10.0;
pub const COOKIE_SIZE: f64 = 30.0;
pub const COOKIE_SPAWN_INTERVAL: u64 = 50; // frames
pub const MAX_COOKIES: usize = 8;
pub const BURNT_PROBABILITY: f64 = 0.2;
pub const COOKIE_POINTS: u32 = 10;
pub const BURNT_PENALTY: u32 = 15;
pub const GAME_SPEED_INCREMENT: f64 = 0.0005;

// Space Shooter: ship
pub const SHIP_W: f64 = 50.0;
pub const SHIP_H: f64 = 60.0;
pub const SHIP_SPEED: f64 = 5.0;
pub const SHIP_SPEEDUP_SPEED: f64 = 8.0;
pub const SHIP_BOTTOM_MARGIN: f64 = 20.0;
pub const SHOOT_DELAY_MS: f64 = 250.0;
pub const SHOOT_DELAY_FLOOR_MS: f64 = 150.0;
pub const SHOOT_DELAY_STEP_MS: f64 = 20.0;
pub const MAX_WEAPON_LEVEL: u32 = 5;

// Space Shooter: enemies and waves
pub const MAX_ENEMIES: usize = 5;
pub const SPAWN_DELAY_MS: f64 = 1500.0;
pub const ENEMY_SHOOT_FLOOR_MS: f64 = 1000.0;
pub const ENEMIES_PER_WAVE: u32 = 10;
pub const WAVE_QUOTA_STEP: u32 = 5;
pub const HIT_PENALTY: u32 = 50;
pub const WAVE_BANNER_MS: f64 = 3000.0;

// Space Shooter: power-ups
pub const POWERUP_SIZE: f64 = 30.0;
pub const POWERUP_FALL_SPEED: f64 = 2.0;
pub const POWERUP_SPIN: f64 = 0.05; // radians per frame
pub const POWERUP_AMBIENT_RATE: f64 = 0.002; // chance per frame
pub const POWERUP_DROP_CHANCE: f64 = 0.2;
pub const BOSS_DROP_COUNT: usize = 3;
pub const MULTISHOT_FRAMES: u32 = 500;
pub const SHIELD_FRAMES: u32 = 600;
pub const SPEEDUP_FRAMES: u32 = 400;

// Effects
pub const MAX_PARTICLES: usize = 200;
pub const FLASH_FRAMES: u32 = 6;

// Colors
pub const SHIP_COLOR: &str = "#4a90e2";
pub const BASKET_COLOR: &str = "#8B4513";
pub const COOKIE_COLOR: &str = "#D2691E";
pub const BURNT_COOKIE_COLOR: &str = "#3b2b1a";
pub const PLAYER_BOLT_COLOR: &str = "#00ffff";
