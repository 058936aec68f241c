//! Card model: face values, collapse state, and deck composition.

pub mod card;
pub mod deck;

pub use card::{Card, CardValue};
pub use deck::{DeckComposition, JACKS_PER_DECK};
