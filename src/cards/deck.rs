//! Deck composition.
//!
//! The standard game deals 16 cards onto a 4x4 board:
//! 2 jacks, 4 aces, 4 twos, 4 threes and 2 fours. Other board sizes need
//! their own composition that fills `size * size` cells exactly.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardValue};
use crate::core::error::GameError;

/// Jacks mark the two starting cells, so every deck needs exactly two.
pub const JACKS_PER_DECK: usize = 2;

/// How many cards of each value make up a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckComposition {
    pub jacks: usize,
    pub aces: usize,
    pub twos: usize,
    pub threes: usize,
    pub fours: usize,
}

impl Default for DeckComposition {
    fn default() -> Self {
        Self::standard()
    }
}

impl DeckComposition {
    #[must_use]
    pub const fn new(jacks: usize, aces: usize, twos: usize, threes: usize, fours: usize) -> Self {
        Self {
            jacks,
            aces,
            twos,
            threes,
            fours,
        }
    }

    /// The 16-card deck for a 4x4 board.
    #[must_use]
    pub const fn standard() -> Self {
        Self::new(2, 4, 4, 4, 2)
    }

    /// Number of cards of the given value.
    #[must_use]
    pub const fn count(&self, value: CardValue) -> usize {
        match value {
            CardValue::Jack => self.jacks,
            CardValue::Ace => self.aces,
            CardValue::Two => self.twos,
            CardValue::Three => self.threes,
            CardValue::Four => self.fours,
        }
    }

    /// Total number of cards.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.jacks + self.aces + self.twos + self.threes + self.fours
    }

    /// Reject compositions that cannot fill a `size`x`size` board or seed
    /// both starting positions.
    pub fn check_fits(&self, size: u8) -> Result<(), GameError> {
        if self.jacks != JACKS_PER_DECK {
            return Err(GameError::JackCount { found: self.jacks });
        }
        let needed = usize::from(size) * usize::from(size);
        if self.total() != needed {
            return Err(GameError::DeckSizeMismatch {
                size,
                needed,
                cards: self.total(),
            });
        }
        Ok(())
    }

    /// Build the unshuffled deck, grouped by value.
    #[must_use]
    pub fn build(&self) -> Vec<Card> {
        CardValue::ALL
            .iter()
            .flat_map(|&value| std::iter::repeat(Card::new(value)).take(self.count(value)))
            .collect()
    }
}
