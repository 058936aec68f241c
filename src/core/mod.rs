//! Core engine types: players, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, MAX_BOARD_SIZE, MIN_BOARD_SIZE, STANDARD_BOARD_SIZE};
pub use error::{GameError, IllegalMove};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
