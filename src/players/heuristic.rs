//! Heuristic strategies and their scoring functions.
//!
//! Scores are pure functions of a board and a candidate move. Lookahead
//! works on a clone of the board (O(1) thanks to the persistent grid), so a
//! what-if collapse can never leak into the live game.
//!
//! Equal scores break toward the lexicographically smallest destination,
//! so both strategies are deterministic.

use crate::board::{Board, Position};
use crate::core::PlayerId;
use crate::game::GameView;
use crate::rules::{LegalMove, Path};

use super::strategy::Strategy;

/// Weight of each open neighbour of the destination.
const OPEN_NEIGHBOR_WEIGHT: f64 = 2.0;
/// Weight of closeness to the board centre.
const CENTRALITY_WEIGHT: f64 = 0.5;
/// Weight of distance from the opponent.
const OPPONENT_DISTANCE_WEIGHT: f64 = 0.3;
/// Risk added per high-value card next to the destination.
const HIGH_VALUE_NEIGHBOR_RISK: f64 = 10.0;
/// Cards with at least this many steps count as high value.
const HIGH_VALUE_STEPS: usize = 3;
/// Risk added when the destination is within the opponent's reach.
const IN_REACH_RISK: f64 = 5.0;

/// Greedy score: prefer open, central destinations away from the opponent.
/// Higher is better.
#[must_use]
pub fn greedy_score(board: &Board, player: PlayerId, mv: &LegalMove) -> f64 {
    let dest = mv.destination;
    let opponent = board.player_position(player.opponent());

    let open = board
        .neighbors(dest)
        .iter()
        .filter(|&&n| !board.is_collapsed(n) && n != opponent)
        .count();

    let center = board.size() / 2;
    let from_center = usize::from(dest.row.abs_diff(center)) + usize::from(dest.col.abs_diff(center));
    let centrality = f64::from(board.size()) - from_center as f64;

    open as f64 * OPEN_NEIGHBOR_WEIGHT
        + centrality * CENTRALITY_WEIGHT
        + board.distance(dest, opponent) as f64 * OPPONENT_DISTANCE_WEIGHT
}

/// Defensive risk: high-value cards next to the destination after the
/// origin collapses, plus a penalty for landing within the opponent's
/// reach. Lower is better.
#[must_use]
pub fn defensive_risk(board: &Board, player: PlayerId, mv: &LegalMove) -> f64 {
    let after = board_after(board, player);
    let dest = mv.destination;

    let high_value = after
        .neighbors(dest)
        .iter()
        .filter(|&&n| {
            let card = after.get_card(n);
            !card.is_collapsed() && card.steps() >= HIGH_VALUE_STEPS
        })
        .count();
    let mut risk = high_value as f64 * HIGH_VALUE_NEIGHBOR_RISK;

    let opponent = board.player_position(player.opponent());
    let opponent_card = board.get_card(opponent);
    if !opponent_card.is_collapsed() && board.distance(dest, opponent) <= opponent_card.steps() {
        risk += IN_REACH_RISK;
    }
    risk
}

/// Value copy of `board` with `player`'s origin collapsed.
fn board_after(board: &Board, player: PlayerId) -> Board {
    let mut after = board.clone();
    after.collapse(board.player_position(player));
    after
}

/// Highest-scoring move, ties to the smallest destination.
fn best_by<F>(moves: &[LegalMove], mut score: F) -> Option<&LegalMove>
where
    F: FnMut(&LegalMove) -> f64,
{
    moves
        .iter()
        .map(|mv| (score(mv), mv))
        .max_by(|(a, mv_a), (b, mv_b)| {
            a.total_cmp(b)
                .then_with(|| mv_b.destination.cmp(&mv_a.destination))
        })
        .map(|(_, mv)| mv)
}

/// Plays the move with the best [`greedy_score`].
#[derive(Clone, Debug)]
pub struct GreedyStrategy {
    name: String,
}

impl GreedyStrategy {
    #[must_use]
    pub fn for_player(player: PlayerId) -> Self {
        Self {
            name: format!("Greedy AI {}", player.0 + 1),
        }
    }
}

impl Strategy for GreedyStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, view: &GameView<'_>, moves: &[LegalMove]) -> Option<Path> {
        best_by(moves, |mv| greedy_score(view.board, view.player, mv)).map(|mv| mv.path.clone())
    }
}

/// Plays the move with the lowest [`defensive_risk`].
#[derive(Clone, Debug)]
pub struct DefensiveStrategy {
    name: String,
}

impl DefensiveStrategy {
    #[must_use]
    pub fn for_player(player: PlayerId) -> Self {
        Self {
            name: format!("Defensive AI {}", player.0 + 1),
        }
    }
}

impl Strategy for DefensiveStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, view: &GameView<'_>, moves: &[LegalMove]) -> Option<Path> {
        best_by(moves, |mv| -defensive_risk(view.board, view.player, mv)).map(|mv| mv.path.clone())
    }
}

/// Destinations of `moves` sorted best-first by greedy score; for display.
#[must_use]
pub fn rank_greedy(board: &Board, player: PlayerId, moves: &[LegalMove]) -> Vec<(Position, f64)> {
    let mut ranked: Vec<_> = moves
        .iter()
        .map(|mv| (mv.destination, greedy_score(board, player, mv)))
        .collect();
    ranked.sort_by(|(pa, a), (pb, b)| b.total_cmp(a).then_with(|| pa.cmp(pb)));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardValue};
    use crate::core::PlayerMap;
    use crate::rules::enumerate_moves;

    fn p(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    fn board_of(values: [CardValue; 16], p0: Position, p1: Position) -> Board {
        Board::from_cards(4, values.map(Card::new), PlayerMap::from_pair(p0, p1)).unwrap()
    }

    fn mv(dest: Position) -> LegalMove {
        LegalMove::from_path(Path::from_slice(&[dest])).unwrap()
    }

    #[test]
    fn test_greedy_prefers_open_destinations() {
        use CardValue::*;
        let mut board = board_of([Ace; 16], p(0, 0), p(2, 2));
        // box in (0, 1) on three sides
        board.collapse(p(0, 2));
        board.collapse(p(1, 1));
        board.collapse(p(3, 1));

        let boxed = greedy_score(&board, PlayerId::FIRST, &mv(p(0, 1)));
        let open = greedy_score(&board, PlayerId::FIRST, &mv(p(1, 0)));
        assert!(open > boxed);
    }

    #[test]
    fn test_greedy_strategy_is_deterministic() {
        use CardValue::*;
        let board = board_of([Ace; 16], p(0, 0), p(2, 2));
        let moves = enumerate_moves(&board, p(0, 0), 1, PlayerId::FIRST);
        let view = GameView {
            board: &board,
            player: PlayerId::FIRST,
            required_steps: 1,
            turn: 0,
        };

        let mut greedy = GreedyStrategy::for_player(PlayerId::FIRST);
        let first = greedy.choose_move(&view, &moves);
        for _ in 0..5 {
            assert_eq!(greedy.choose_move(&view, &moves), first);
        }

        let ranked = rank_greedy(&board, PlayerId::FIRST, &moves);
        assert_eq!(first.unwrap().last(), Some(&ranked[0].0));
    }

    #[test]
    fn test_ties_break_to_smallest_destination() {
        let moves = vec![mv(p(1, 0)), mv(p(0, 3)), mv(p(0, 1))];
        let best = best_by(&moves, |_| 1.0).unwrap();
        assert_eq!(best.destination, p(0, 1));
    }

    #[test]
    fn test_defensive_risk_counts_high_neighbors() {
        use CardValue::*;
        #[rustfmt::skip]
        let board = board_of(
            [
                Jack,  Ace, Ace, Ace,
                Ace,   Ace, Ace, Ace,
                Four,  Ace, Ace, Ace,
                Ace,   Ace, Ace, Jack,
            ],
            p(0, 0),
            p(3, 3),
        );

        // (1, 0) borders the four at (2, 0)
        let risky = defensive_risk(&board, PlayerId::FIRST, &mv(p(1, 0)));
        let safe = defensive_risk(&board, PlayerId::FIRST, &mv(p(0, 1)));
        assert_eq!(safe, 0.0);
        assert_eq!(risky, HIGH_VALUE_NEIGHBOR_RISK);
    }

    #[test]
    fn test_defensive_risk_within_opponent_reach() {
        use CardValue::*;
        let board = board_of([Two; 16], p(0, 0), p(2, 2));
        // (1, 2) is one step from the opponent, who must move two
        let risk = defensive_risk(&board, PlayerId::FIRST, &mv(p(1, 2)));
        assert_eq!(risk, IN_REACH_RISK);
    }

    #[test]
    fn test_lookahead_does_not_touch_live_board() {
        use CardValue::*;
        let board = board_of([Three; 16], p(0, 0), p(2, 2));
        let before = board.clone();
        let _ = defensive_risk(&board, PlayerId::FIRST, &mv(p(0, 1)));
        assert_eq!(board, before);
        assert!(!board.is_collapsed(p(0, 0)));
    }

    #[test]
    fn test_defensive_strategy_avoids_risk() {
        use CardValue::*;
        #[rustfmt::skip]
        let board = board_of(
            [
                Jack,  Ace, Ace, Ace,
                Ace,   Ace, Ace, Ace,
                Four,  Ace, Ace, Ace,
                Ace,   Ace, Ace, Jack,
            ],
            p(0, 0),
            p(3, 3),
        );
        let moves = enumerate_moves(&board, p(0, 0), 1, PlayerId::FIRST);
        let view = GameView {
            board: &board,
            player: PlayerId::FIRST,
            required_steps: 1,
            turn: 0,
        };

        let path = DefensiveStrategy::for_player(PlayerId::FIRST)
            .choose_move(&view, &moves)
            .unwrap();
        assert_ne!(path.last(), Some(&p(1, 0)));
    }
}
