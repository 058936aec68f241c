//! Error types.
//!
//! - `IllegalMove`: a candidate path broke a movement rule. Recoverable;
//!   the caller picks another path.
//! - `GameError`: everything the engine can refuse, including lifecycle
//!   misuse and configuration that cannot produce a valid board.

use thiserror::Error;

use crate::board::Position;

/// Why a candidate path is not a legal move.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("path is empty")]
    EmptyPath,
    #[error("{0} is off the board")]
    OffBoard(Position),
    #[error("{from} and {to} are not adjacent")]
    NotAdjacent { from: Position, to: Position },
    #[error("path visits {0} twice")]
    Revisit(Position),
    #[error("{0} has collapsed")]
    Collapsed(Position),
    #[error("path ends where it started")]
    ReturnsToStart,
    #[error("{0} is occupied by the opponent")]
    OntoOpponent(Position),
    #[error("path has {actual} steps but the card requires {expected}")]
    WrongLength { expected: usize, actual: usize },
}

/// Errors returned by the game and board setup.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),
    #[error("game has not been started")]
    NotStarted,
    #[error("game has already been started")]
    AlreadyStarted,
    #[error("game is over")]
    GameOver,
    #[error("a {size}x{size} board needs {needed} cards, deck has {cards}")]
    DeckSizeMismatch { size: u8, needed: usize, cards: usize },
    #[error("deck must contain exactly 2 jacks, found {found}")]
    JackCount { found: usize },
    #[error("{player} cannot start at {position}")]
    InvalidPlacement {
        player: crate::core::PlayerId,
        position: Position,
    },
    #[error("board size {size} is out of range")]
    BoardSizeOutOfRange { size: u8 },
    #[error("{player} returned no move while legal moves exist")]
    StrategyForfeit { player: crate::core::PlayerId },
    #[error("recorded move {turn} does not match the replayed game")]
    ReplayMismatch { turn: usize },
    #[error("encoding failed: {0}")]
    Encoding(#[from] bincode::Error),
}
