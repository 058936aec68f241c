//! Legal move enumeration.
//!
//! Depth-first search over the wrapping grid. From the start cell every
//! branch takes exactly `steps` orthogonal steps; shorter paths are never
//! offered. Branching is at most 4 and depth at most 4 for standard cards,
//! so a full search visits at most 256 paths.
//!
//! Collapsed cells are read from the board on every call; nothing about
//! the board is cached between turns.

use std::ops::ControlFlow;

use rustc_hash::FxHashSet;
use tracing::trace;

use super::legality::{LegalMove, MoveContext, Path};
use crate::board::{Board, Position};
use crate::core::PlayerId;

/// Every legal path of exactly `steps` steps for `player` from `start`.
///
/// Paths come out in search order (right, down, left, up at each step).
/// Several paths may share a destination.
#[must_use]
pub fn enumerate_paths(board: &Board, start: Position, steps: usize, player: PlayerId) -> Vec<Path> {
    let mut paths = Vec::new();
    let _ = search(board, start, steps, player, |path| {
        paths.push(path.clone());
        ControlFlow::Continue(())
    });
    trace!(%start, steps, count = paths.len(), "enumerated paths");
    paths
}

/// Distinct legal destinations, each with the first path found to reach it.
///
/// Destinations keep the order in which the search first reached them.
#[must_use]
pub fn enumerate_moves(
    board: &Board,
    start: Position,
    steps: usize,
    player: PlayerId,
) -> Vec<LegalMove> {
    let mut moves: Vec<LegalMove> = Vec::new();
    let mut seen: FxHashSet<Position> = FxHashSet::default();
    let _ = search(board, start, steps, player, |path| {
        if let Some(mv) = LegalMove::from_path(path.clone()) {
            if seen.insert(mv.destination) {
                moves.push(mv);
            }
        }
        ControlFlow::Continue(())
    });
    trace!(%start, steps, count = moves.len(), "enumerated destinations");
    moves
}

/// Does `player` have at least one legal move? Stops at the first one.
#[must_use]
pub fn has_legal_move(board: &Board, start: Position, steps: usize, player: PlayerId) -> bool {
    search(board, start, steps, player, |_| ControlFlow::Break(())).is_break()
}

fn search<F>(
    board: &Board,
    start: Position,
    steps: usize,
    player: PlayerId,
    mut visit: F,
) -> ControlFlow<()>
where
    F: FnMut(&Path) -> ControlFlow<()>,
{
    let ctx = MoveContext::new(board, start, player);
    let mut walk = Walk {
        ctx,
        visited: ctx.visited(),
        path: Path::new(),
    };
    walk.step(start, steps, &mut visit)
}

/// In-progress search state: the current path and the cells on it.
struct Walk<'a> {
    ctx: MoveContext<'a>,
    visited: FxHashSet<Position>,
    path: Path,
}

impl Walk<'_> {
    fn step<F>(&mut self, pos: Position, remaining: usize, visit: &mut F) -> ControlFlow<()>
    where
        F: FnMut(&Path) -> ControlFlow<()>,
    {
        if remaining == 0 {
            if self.ctx.can_finish(pos).is_ok() {
                return visit(&self.path);
            }
            return ControlFlow::Continue(());
        }

        let neighbors = self.ctx.board.neighbors(pos);
        for (i, &next) in neighbors.iter().enumerate() {
            // small boards map two directions onto the same cell
            if neighbors[..i].contains(&next) {
                continue;
            }
            if self.ctx.can_enter(next, &self.visited).is_err() {
                continue;
            }

            self.visited.insert(next);
            self.path.push(next);
            let flow = self.step(next, remaining - 1, visit);
            self.path.pop();
            self.visited.remove(&next);
            flow?;
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardValue};
    use crate::core::PlayerMap;

    fn open_board(p0: Position, p1: Position) -> Board {
        Board::from_cards(
            4,
            std::iter::repeat(Card::new(CardValue::Two)).take(16),
            PlayerMap::from_pair(p0, p1),
        )
        .unwrap()
    }

    #[test]
    fn test_one_step_reaches_four_neighbors() {
        let board = open_board(Position::new(1, 1), Position::new(3, 3));
        let moves = enumerate_moves(&board, Position::new(1, 1), 1, PlayerId::FIRST);

        let dests: Vec<_> = moves.iter().map(|m| m.destination).collect();
        assert_eq!(
            dests,
            vec![
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(0, 1),
            ]
        );
    }

    #[test]
    fn test_zero_steps_has_no_moves() {
        let board = open_board(Position::new(0, 0), Position::new(2, 2));
        assert!(enumerate_paths(&board, Position::new(0, 0), 0, PlayerId::FIRST).is_empty());
        assert!(!has_legal_move(&board, Position::new(0, 0), 0, PlayerId::FIRST));
    }

    #[test]
    fn test_two_step_path_count() {
        // 4 first steps, 3 onward steps each (never back to start)
        let board = open_board(Position::new(0, 0), Position::new(2, 2));
        let paths = enumerate_paths(&board, Position::new(0, 0), 2, PlayerId::FIRST);
        assert_eq!(paths.len(), 12);
        assert!(paths.iter().all(|p| p.len() == 2));
    }

    #[test]
    fn test_moves_dedupe_by_destination() {
        let board = open_board(Position::new(0, 0), Position::new(2, 2));
        let paths = enumerate_paths(&board, Position::new(0, 0), 2, PlayerId::FIRST);
        let moves = enumerate_moves(&board, Position::new(0, 0), 2, PlayerId::FIRST);

        let distinct: FxHashSet<Position> = paths.iter().map(|p| p[1]).collect();
        assert_eq!(moves.len(), distinct.len());
        for mv in &moves {
            assert!(paths.contains(&mv.path));
        }
    }

    #[test]
    fn test_has_legal_move_matches_enumeration() {
        let mut board = open_board(Position::new(0, 0), Position::new(0, 1));
        assert!(has_legal_move(&board, Position::new(0, 0), 1, PlayerId::FIRST));

        board.collapse(Position::new(1, 0));
        board.collapse(Position::new(0, 3));
        board.collapse(Position::new(3, 0));
        assert!(enumerate_moves(&board, Position::new(0, 0), 1, PlayerId::FIRST).is_empty());
        assert!(!has_legal_move(&board, Position::new(0, 0), 1, PlayerId::FIRST));
    }

    #[test]
    fn test_two_by_two_board_has_no_duplicate_paths() {
        let board = Board::from_cards(
            2,
            std::iter::repeat(Card::new(CardValue::Ace)).take(4),
            PlayerMap::from_pair(Position::new(0, 0), Position::new(1, 1)),
        )
        .unwrap();
        let paths = enumerate_paths(&board, Position::new(0, 0), 1, PlayerId::FIRST);
        assert_eq!(
            paths,
            vec![
                Path::from_slice(&[Position::new(0, 1)]),
                Path::from_slice(&[Position::new(1, 0)]),
            ]
        );
    }
}
