//! Validation of externally supplied paths.
//!
//! A pointer-driven UI or a scripted client hands the engine a path rather
//! than picking from the enumerated list. The path is legal exactly when
//! [`enumerate_paths`](super::enumerate_paths) with `steps = path.len()`
//! would have produced it.

use super::legality::MoveContext;
use crate::board::{Board, Position};
use crate::core::{IllegalMove, PlayerId};

/// Check `path` for `player` moving from `start`, naming the first rule it
/// breaks.
///
/// Adjacency counts steps across the board edges: on a 4x4 board
/// `(0, 3) -> (0, 0)` is one step.
pub fn validate(
    board: &Board,
    start: Position,
    path: &[Position],
    player: PlayerId,
) -> Result<(), IllegalMove> {
    let last = *path.last().ok_or(IllegalMove::EmptyPath)?;

    let ctx = MoveContext::new(board, start, player);
    let mut visited = ctx.visited();
    let mut current = start;

    for &next in path {
        if !board.contains(next) {
            return Err(IllegalMove::OffBoard(next));
        }
        if !board.is_adjacent(current, next) {
            return Err(IllegalMove::NotAdjacent {
                from: current,
                to: next,
            });
        }
        ctx.can_enter(next, &visited)?;
        visited.insert(next);
        current = next;
    }

    ctx.can_finish(last)
}

/// Boolean form of [`validate`].
#[must_use]
pub fn is_legal(board: &Board, start: Position, path: &[Position], player: PlayerId) -> bool {
    validate(board, start, path, player).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardValue};
    use crate::core::PlayerMap;

    fn p(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    fn board() -> Board {
        Board::from_cards(
            4,
            std::iter::repeat(Card::new(CardValue::Three)).take(16),
            PlayerMap::from_pair(p(0, 0), p(2, 2)),
        )
        .unwrap()
    }

    #[test]
    fn test_accepts_simple_path() {
        let board = board();
        assert_eq!(validate(&board, p(0, 0), &[p(0, 1), p(1, 1)], PlayerId::FIRST), Ok(()));
    }

    #[test]
    fn test_accepts_wrapping_steps() {
        let board = board();
        assert!(is_legal(&board, p(0, 0), &[p(0, 3), p(3, 3)], PlayerId::FIRST));
        assert!(is_legal(&board, p(0, 0), &[p(3, 0)], PlayerId::FIRST));
    }

    #[test]
    fn test_rejects_empty() {
        let board = board();
        assert_eq!(
            validate(&board, p(0, 0), &[], PlayerId::FIRST),
            Err(IllegalMove::EmptyPath)
        );
    }

    #[test]
    fn test_rejects_jump() {
        let board = board();
        // two columns apart is not a step, even though it wraps to distance 2
        assert_eq!(
            validate(&board, p(0, 0), &[p(0, 2)], PlayerId::FIRST),
            Err(IllegalMove::NotAdjacent {
                from: p(0, 0),
                to: p(0, 2)
            })
        );
        assert_eq!(
            validate(&board, p(0, 0), &[p(1, 1)], PlayerId::FIRST),
            Err(IllegalMove::NotAdjacent {
                from: p(0, 0),
                to: p(1, 1)
            })
        );
    }

    #[test]
    fn test_rejects_off_board() {
        let board = board();
        assert_eq!(
            validate(&board, p(0, 0), &[p(0, 4)], PlayerId::FIRST),
            Err(IllegalMove::OffBoard(p(0, 4)))
        );
    }

    #[test]
    fn test_rejects_revisit_and_return() {
        let board = board();
        assert_eq!(
            validate(&board, p(0, 0), &[p(0, 1), p(0, 0)], PlayerId::FIRST),
            Err(IllegalMove::Revisit(p(0, 0)))
        );
        assert_eq!(
            validate(&board, p(0, 0), &[p(0, 1), p(1, 1), p(0, 1)], PlayerId::FIRST),
            Err(IllegalMove::Revisit(p(0, 1)))
        );
    }

    #[test]
    fn test_rejects_collapsed_anywhere() {
        let mut board = board();
        board.collapse(p(0, 1));
        assert_eq!(
            validate(&board, p(0, 0), &[p(0, 1), p(1, 1)], PlayerId::FIRST),
            Err(IllegalMove::Collapsed(p(0, 1)))
        );
    }

    #[test]
    fn test_opponent_blocks_only_destination() {
        let board = board();
        assert_eq!(
            validate(&board, p(0, 0), &[p(1, 0), p(2, 0), p(2, 1), p(2, 2)], PlayerId::FIRST),
            Err(IllegalMove::OntoOpponent(p(2, 2)))
        );
        assert!(is_legal(&board, p(0, 0), &[p(1, 0), p(2, 0), p(2, 1)], PlayerId::FIRST));
        // passing over the opponent's cell mid-path
        assert!(is_legal(&board, p(2, 1), &[p(2, 2), p(2, 3)], PlayerId::FIRST));
    }
}
