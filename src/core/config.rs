//! Game configuration.
//!
//! A game is configured once at construction:
//! - `board_size`: side length of the square grid
//! - `seed`: seed for the deal (same seed, same board)
//! - `deck`: card counts dealt onto the board

use serde::{Deserialize, Serialize};

use crate::cards::DeckComposition;
use crate::core::error::GameError;

/// Side length of the standard board.
pub const STANDARD_BOARD_SIZE: u8 = 4;

/// Smallest supported board side.
pub const MIN_BOARD_SIZE: u8 = 2;

/// Largest supported board side.
pub const MAX_BOARD_SIZE: u8 = 16;

/// Configuration for a new game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square board (default: 4).
    pub board_size: u8,

    /// Seed for the shuffle-deal.
    /// Same seed produces the same initial board.
    pub seed: u64,

    /// Cards dealt onto the board. Must fill it exactly.
    pub deck: DeckComposition,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: STANDARD_BOARD_SIZE,
            seed: 42,
            deck: DeckComposition::standard(),
        }
    }
}

impl GameConfig {
    /// Set the deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: u8) -> Self {
        self.board_size = size;
        self
    }

    /// Set the deck composition.
    #[must_use]
    pub fn with_deck(mut self, deck: DeckComposition) -> Self {
        self.deck = deck;
        self
    }

    /// Check that the deck can fill the board and seed both players.
    ///
    /// Runs before any card is dealt.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(GameError::BoardSizeOutOfRange {
                size: self.board_size,
            });
        }
        self.deck.check_fits(self.board_size)
    }
}
