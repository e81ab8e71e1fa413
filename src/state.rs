use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::catcher::CatcherGame;
use crate::shooter::ShooterGame;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Menu,
    Playing,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameKind {
    Catcher,
    Shooter,
}

impl GameKind {
    pub fn title(&self) -> &'static str {
        match self {
            GameKind::Catcher => "Cookie Catcher",
            GameKind::Shooter => "Space Shooter",
        }
    }

    pub fn cookie_name(&self) -> &'static str {
        match self {
            GameKind::Catcher => "cookieCatcherHighScore",
            GameKind::Shooter => "spaceShooterHighScore",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Intents {
    pub move_left: bool,
    pub move_right: bool,
    pub firing: bool,
}

impl Intents {
    pub fn clear(&mut self) {
        *self = Intents::default();
    }
}

pub enum Session {
    Catcher(CatcherGame),
    Shooter(ShooterGame),
}

impl Session {
    pub fn score(&self) -> u32 {
        match self {
            Session::Catcher(g) => g.score,
            Session::Shooter(g) => g.score,
        }
    }

    pub fn is_over(&self) -> bool {
        match self {
            Session::Catcher(g) => g.over,
            Session::Shooter(g) => g.over,
        }
    }

    pub fn kind(&self) -> GameKind {
        match self {
            Session::Catcher(_) => GameKind::Catcher,
            Session::Shooter(_) => GameKind::Shooter,
        }
    }
}

pub struct GameState {
    pub phase: Phase,
    pub session: Option<Session>,
    pub input: Intents,
    pub rng: SmallRng,

    // High scores, loaded at startup and updated on game over
    pub catcher_high_score: u32,
    pub shooter_high_score: u32,
    // Set when the session that just ended beat the stored score
    pub new_high_score: bool,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self {
            phase: Phase::Menu,
            session: None,
            input: Intents::default(),
            rng: SmallRng::seed_from_u64(seed),
            catcher_high_score: 0,
            shooter_high_score: 0,
            new_high_score: false,
        }
    }

    pub fn high_score(&self, kind: GameKind) -> u32 {
        match kind {
            GameKind::Catcher => self.catcher_high_score,
            GameKind::Shooter => self.shooter_high_score,
        }
    }

    pub fn set_high_score(&mut self, kind: GameKind, score: u32) {
        match kind {
            GameKind::Catcher => self.catcher_high_score = score,
            GameKind::Shooter => self.shooter_high_score = score,
        }
    }

    pub fn start(&mut self, kind: GameKind) {
        let (w, h) = (crate::constants::CANVAS_W, crate::constants::CANVAS_H);
        self.session = Some(match kind {
            GameKind::Catcher => Session::Catcher(CatcherGame::new(w, h)),
            GameKind::Shooter => Session::Shooter(ShooterGame::new(w, h)),
        });
        self.input = Intents::default();
        self.new_high_score = false;
        self.phase = Phase::Playing;
    }
}

pub type SharedState = Rc<RefCell<GameState>>;

pub fn new_shared_state(seed: u64) -> SharedState {
    Rc::new(RefCell::new(GameState::new(seed)))
}
