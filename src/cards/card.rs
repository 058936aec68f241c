//! Cards: the occupant of every board cell.
//!
//! A card's value is fixed for the whole game. The only mutable state is the
//! `collapsed` flag, which flips once when a player departs the cell.

use serde::{Deserialize, Serialize};

/// Face value of a card.
///
/// `Jack` and `Ace` both move one step. Jacks only mark the two starting
/// cells; they are distinct entries in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardValue {
    Jack,
    Ace,
    Two,
    Three,
    Four,
}

impl CardValue {
    /// Every face value, in deck order.
    pub const ALL: [CardValue; 5] = [
        CardValue::Jack,
        CardValue::Ace,
        CardValue::Two,
        CardValue::Three,
        CardValue::Four,
    ];

    /// Number of steps a player standing on this card must move.
    #[must_use]
    pub const fn steps(self) -> usize {
        match self {
            CardValue::Jack | CardValue::Ace => 1,
            CardValue::Two => 2,
            CardValue::Three => 3,
            CardValue::Four => 4,
        }
    }

    /// Single-character label.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            CardValue::Jack => 'J',
            CardValue::Ace => '1',
            CardValue::Two => '2',
            CardValue::Three => '3',
            CardValue::Four => '4',
        }
    }
}

/// A card on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    value: CardValue,
    collapsed: bool,
}

impl Card {
    /// Create a face-up, uncollapsed card.
    #[must_use]
    pub const fn new(value: CardValue) -> Self {
        Self {
            value,
            collapsed: false,
        }
    }

    /// The card's face value.
    #[must_use]
    pub const fn value(&self) -> CardValue {
        self.value
    }

    /// Steps required when standing on this card.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.value.steps()
    }

    #[must_use]
    pub const fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Remove the card from play. Collapsing twice is a no-op.
    pub fn collapse(&mut self) {
        self.collapsed = true;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.collapsed {
            write!(f, "X")
        } else {
            write!(f, "{}", self.value.symbol())
        }
    }
}
