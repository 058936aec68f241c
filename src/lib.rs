//! # collapsi
//!
//! Rules engine for Collapsi, a two-player perfect-information game played
//! on a wrapping grid of cards.
//!
//! ## Rules
//!
//! 1. Each player stands on a card and must move exactly as many
//!    orthogonal steps as the card shows (jacks and aces move one).
//! 2. A move never revisits a cell, never enters a collapsed cell, and
//!    never ends on the opponent. Paths wrap around the board edges.
//! 3. The cell a player leaves collapses for the rest of the game.
//! 4. A player with no legal move loses.
//!
//! ## Design Principles
//!
//! - **One legality rule**: enumeration and validation share a single
//!   predicate, so they cannot drift apart.
//! - **Deterministic**: the deal and random strategies draw from a seeded
//!   ChaCha RNG.
//! - **Atomic moves**: `Game::apply_move` either applies everything or
//!   changes nothing.
//! - **Cheap snapshots**: boards and history use `im` persistent structures,
//!   so lookahead copies are O(1).
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, errors
//! - `cards`: card values and deck composition
//! - `board`: positions, wraparound, dealing, collapse
//! - `rules`: move enumeration and validation
//! - `game`: turn state machine, history, replay
//! - `players`: strategies and the match runner

pub mod board;
pub mod cards;
pub mod core;
pub mod game;
pub mod players;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, GameRngState, IllegalMove, PlayerId, PlayerMap,
};

pub use crate::cards::{Card, CardValue, DeckComposition};

pub use crate::board::{Board, Direction, Position};

pub use crate::rules::{
    enumerate_moves, enumerate_paths, has_legal_move, is_legal, validate, LegalMove, Path,
};

pub use crate::game::{Game, GameRecord, GameState, GameView, MoveRecord};

pub use crate::players::{
    play_match, DefensiveStrategy, GreedyStrategy, ManualStrategy, MatchOutcome, RandomStrategy,
    Strategy,
};
