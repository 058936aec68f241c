//! The movement rule shared by enumeration and validation.
//!
//! A legal path, from a start cell:
//! - never enters a cell already on the path (the start counts)
//! - never enters a collapsed cell
//! - ends somewhere other than the start
//! - does not end on the opponent's cell
//!
//! The opponent's cell may be crossed mid-path; only the destination is
//! blocked. Both the move enumerator and the validator call these checks,
//! so the two can never disagree.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Position};
use crate::core::{IllegalMove, PlayerId};

/// Cells visited by a move, excluding the start.
pub type Path = SmallVec<[Position; 4]>;

/// A reachable destination and one path that reaches it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LegalMove {
    pub destination: Position,
    pub path: Path,
}

impl LegalMove {
    /// Wrap a non-empty path. Returns `None` for an empty one.
    #[must_use]
    pub fn from_path(path: Path) -> Option<Self> {
        let destination = *path.last()?;
        Some(Self { destination, path })
    }

    /// Number of steps taken.
    #[must_use]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Fixed inputs for judging one player's move.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MoveContext<'a> {
    pub board: &'a Board,
    pub start: Position,
    pub opponent: Position,
}

impl<'a> MoveContext<'a> {
    pub fn new(board: &'a Board, start: Position, player: PlayerId) -> Self {
        Self {
            board,
            start,
            opponent: board.player_position(player.opponent()),
        }
    }

    /// Fresh visited set containing only the start.
    pub fn visited(&self) -> FxHashSet<Position> {
        let mut visited = FxHashSet::default();
        visited.insert(self.start);
        visited
    }

    /// May the path step onto `next`?
    pub fn can_enter(&self, next: Position, visited: &FxHashSet<Position>) -> Result<(), IllegalMove> {
        if visited.contains(&next) {
            return Err(IllegalMove::Revisit(next));
        }
        if self.board.is_collapsed(next) {
            return Err(IllegalMove::Collapsed(next));
        }
        Ok(())
    }

    /// May the path stop on `last`?
    pub fn can_finish(&self, last: Position) -> Result<(), IllegalMove> {
        if last == self.start {
            return Err(IllegalMove::ReturnsToStart);
        }
        if self.board.is_collapsed(last) {
            return Err(IllegalMove::Collapsed(last));
        }
        if last == self.opponent {
            return Err(IllegalMove::OntoOpponent(last));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardValue};
    use crate::core::PlayerMap;

    fn board() -> Board {
        Board::from_cards(
            4,
            std::iter::repeat(Card::new(CardValue::Two)).take(16),
            PlayerMap::from_pair(Position::new(0, 0), Position::new(0, 2)),
        )
        .unwrap()
    }

    #[test]
    fn test_can_enter() {
        let mut board = board();
        board.collapse(Position::new(1, 0));
        let ctx = MoveContext::new(&board, Position::new(0, 0), PlayerId::FIRST);
        let visited = ctx.visited();

        assert_eq!(
            ctx.can_enter(Position::new(0, 0), &visited),
            Err(IllegalMove::Revisit(Position::new(0, 0)))
        );
        assert_eq!(
            ctx.can_enter(Position::new(1, 0), &visited),
            Err(IllegalMove::Collapsed(Position::new(1, 0)))
        );
        // crossing the opponent is allowed
        assert_eq!(ctx.can_enter(Position::new(0, 2), &visited), Ok(()));
    }

    #[test]
    fn test_can_finish() {
        let board = board();
        let ctx = MoveContext::new(&board, Position::new(0, 0), PlayerId::FIRST);

        assert_eq!(ctx.can_finish(Position::new(0, 0)), Err(IllegalMove::ReturnsToStart));
        assert_eq!(
            ctx.can_finish(Position::new(0, 2)),
            Err(IllegalMove::OntoOpponent(Position::new(0, 2)))
        );
        assert_eq!(ctx.can_finish(Position::new(2, 0)), Ok(()));
    }

    #[test]
    fn test_legal_move_from_path() {
        assert!(LegalMove::from_path(Path::new()).is_none());

        let mv = LegalMove::from_path(Path::from_slice(&[
            Position::new(0, 1),
            Position::new(0, 2),
        ]))
        .unwrap();
        assert_eq!(mv.destination, Position::new(0, 2));
        assert_eq!(mv.len(), 2);
    }
}
