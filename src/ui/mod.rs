//! egui front end: play against the engine, watch it play itself, or use
//! it for hints in a hotseat game.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::{GameMode, GameState, Job, Outcome, HINT_MAX_DEPTH};
