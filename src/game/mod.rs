//! Game orchestration: lifecycle, turns, history, and replay.

#[allow(clippy::module_inception)]
mod game;
mod history;

pub use game::{Game, GameState, GameView};
pub use history::{GameRecord, MoveRecord};
