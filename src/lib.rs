pub mod app;
pub mod audio;
pub mod canvas;
pub mod catcher;
pub mod collision;
pub mod constants;
pub mod effects;
pub mod game_loop;
pub mod highscore;
pub mod hud;
pub mod input;
pub mod renderer;
pub mod shooter;
pub mod state;
