//! The board: a square, wrapping grid of cards plus both player tokens.
//!
//! ## Wraparound
//!
//! Coordinates wrap modulo `size` on both axes, so the board is a torus:
//! stepping right from the last column re-enters at column 0. Every
//! coordinate produced by a step goes through [`Board::wrap_offset`] before it
//! is looked up or compared.
//!
//! ## Cloning
//!
//! The grid is an `im::Vector`, so cloning a board for a what-if evaluation
//! is O(1) and never aliases the live game.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::position::{Direction, Position};
use crate::cards::{Card, CardValue, DeckComposition};
use crate::core::config::{MAX_BOARD_SIZE, MIN_BOARD_SIZE, STANDARD_BOARD_SIZE};
use crate::core::{GameError, GameRng, PlayerId, PlayerMap};

/// Square grid of cards with two player tokens.
///
/// Every cell always holds exactly one card. After setup the only per-cell
/// mutation is collapsing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: u8,
    grid: Vector<Card>,
    players: PlayerMap<Position>,
}

impl Board {
    /// Deal the standard 16-card deck onto a 4x4 board.
    ///
    /// Rejects any other size before a card is dealt.
    pub fn setup_standard_game(size: u8, rng: &mut GameRng) -> Result<Self, GameError> {
        if size != STANDARD_BOARD_SIZE {
            return Err(GameError::DeckSizeMismatch {
                size,
                needed: usize::from(size) * usize::from(size),
                cards: DeckComposition::standard().total(),
            });
        }
        Self::deal(size, &DeckComposition::standard(), rng)
    }

    /// Shuffle `deck` and deal it row-major onto a `size`x`size` board.
    ///
    /// The first jack dealt becomes player 0's start, the second player 1's.
    pub fn deal(size: u8, deck: &DeckComposition, rng: &mut GameRng) -> Result<Self, GameError> {
        check_size(size)?;
        deck.check_fits(size)?;

        let mut cards = deck.build();
        rng.shuffle(&mut cards);

        let mut jacks = cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.value() == CardValue::Jack)
            .map(|(i, _)| position_of(size, i));
        let (first, second) = match (jacks.next(), jacks.next()) {
            (Some(first), Some(second)) => (first, second),
            _ => return Err(GameError::JackCount { found: deck.jacks }),
        };

        Ok(Self {
            size,
            grid: cards.into_iter().collect(),
            players: PlayerMap::from_pair(first, second),
        })
    }

    /// Build a board from explicit cards in row-major order.
    ///
    /// Used for fixed layouts and replays. Starting cells need not be jacks,
    /// but both must be on the board, distinct, and not collapsed.
    pub fn from_cards(
        size: u8,
        cards: impl IntoIterator<Item = Card>,
        players: PlayerMap<Position>,
    ) -> Result<Self, GameError> {
        check_size(size)?;
        let grid: Vector<Card> = cards.into_iter().collect();
        let needed = usize::from(size) * usize::from(size);
        if grid.len() != needed {
            return Err(GameError::DeckSizeMismatch {
                size,
                needed,
                cards: grid.len(),
            });
        }

        let board = Self {
            size,
            grid,
            players,
        };
        for (player, &position) in board.players.iter() {
            let clash = position == board.players[player.opponent()];
            if !board.contains(position) || clash || board.get_card(position).is_collapsed() {
                return Err(GameError::InvalidPlacement { player, position });
            }
        }
        Ok(board)
    }

    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Is `pos` inside `0..size` on both axes?
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Reduce both coordinates modulo the board size.
    #[must_use]
    pub fn wrap(&self, pos: Position) -> Position {
        Position::new(pos.row % self.size, pos.col % self.size)
    }

    /// Apply a signed offset to `pos` and wrap the result.
    #[must_use]
    pub fn wrap_offset(&self, pos: Position, d_row: i32, d_col: i32) -> Position {
        let size = i32::from(self.size);
        let row = (i32::from(pos.row) + d_row).rem_euclid(size);
        let col = (i32::from(pos.col) + d_col).rem_euclid(size);
        // rem_euclid keeps both in 0..size, which fits in u8
        Position::new(row as u8, col as u8)
    }

    /// The cell one step from `pos` in `dir`.
    #[must_use]
    pub fn neighbor(&self, pos: Position, dir: Direction) -> Position {
        let (d_row, d_col) = dir.delta();
        self.wrap_offset(pos, d_row, d_col)
    }

    /// All four neighbours in search order. On boards of size 2 some
    /// coincide.
    #[must_use]
    pub fn neighbors(&self, pos: Position) -> [Position; 4] {
        Direction::ALL.map(|dir| self.neighbor(pos, dir))
    }

    /// Are `a` and `b` one orthogonal step apart, counting steps across
    /// the edges?
    #[must_use]
    pub fn is_adjacent(&self, a: Position, b: Position) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Orthogonal distance on the torus, ignoring collapsed cells.
    #[must_use]
    pub fn distance(&self, a: Position, b: Position) -> usize {
        let axis = |x: u8, y: u8| {
            let d = x.abs_diff(y);
            usize::from(d.min(self.size - d))
        };
        axis(a.row, b.row) + axis(a.col, b.col)
    }

    /// The card at `pos`. Coordinates are wrapped first, so this never fails.
    #[must_use]
    pub fn get_card(&self, pos: Position) -> Card {
        self.grid[self.index(pos)]
    }

    #[must_use]
    pub fn is_collapsed(&self, pos: Position) -> bool {
        self.get_card(pos).is_collapsed()
    }

    /// Permanently remove the card at `pos` from play.
    pub fn collapse(&mut self, pos: Position) {
        let index = self.index(pos);
        if let Some(card) = self.grid.get_mut(index) {
            card.collapse();
        }
    }

    /// Number of collapsed cells.
    #[must_use]
    pub fn collapsed_count(&self) -> usize {
        self.grid.iter().filter(|card| card.is_collapsed()).count()
    }

    /// Where `player`'s token stands.
    #[must_use]
    pub fn player_position(&self, player: PlayerId) -> Position {
        self.players[player]
    }

    #[must_use]
    pub fn player_positions(&self) -> &PlayerMap<Position> {
        &self.players
    }

    /// Which player, if any, stands on `pos`.
    #[must_use]
    pub fn occupant(&self, pos: Position) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, &p)| p == pos)
            .map(|(player, _)| player)
    }

    pub(crate) fn move_player(&mut self, player: PlayerId, to: Position) {
        self.players[player] = to;
    }

    /// Every cell in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.grid.len()).map(move |i| position_of(self.size, i))
    }

    fn index(&self, pos: Position) -> usize {
        let pos = self.wrap(pos);
        usize::from(pos.row) * usize::from(self.size) + usize::from(pos.col)
    }
}

impl std::fmt::Display for Board {
    /// One row per line. Tokens show as `A` (player 0) and `B` (player 1).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            let line: Vec<String> = (0..self.size)
                .map(|col| {
                    let pos = Position::new(row, col);
                    match self.occupant(pos) {
                        Some(PlayerId(0)) => "A".to_string(),
                        Some(_) => "B".to_string(),
                        None => self.get_card(pos).to_string(),
                    }
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

fn check_size(size: u8) -> Result<(), GameError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(GameError::BoardSizeOutOfRange { size })
    }
}

fn position_of(size: u8, index: usize) -> Position {
    let size = usize::from(size);
    // index < size * size <= 256
    Position::new((index / size) as u8, (index % size) as u8)
}
