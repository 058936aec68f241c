//! The strategy capability and its non-heuristic variants.
//!
//! The engine never depends on how a path is chosen. A strategy receives a
//! read-only [`GameView`] and the enumerated legal moves and returns a path
//! for [`Game::apply_move`](crate::Game::apply_move).

use std::collections::VecDeque;

use crate::core::{GameRng, PlayerId};
use crate::game::GameView;
use crate::rules::{LegalMove, Path};

// =============================================================================
// Strategy
// =============================================================================

/// Chooses a move for one player.
pub trait Strategy {
    /// Display name.
    fn name(&self) -> &str;

    /// Pick a path to play.
    ///
    /// `moves` is never empty when called by the match runner. Returning
    /// `None` forfeits the turn. The returned path need not be one of
    /// `moves`; the game validates it.
    fn choose_move(&mut self, view: &GameView<'_>, moves: &[LegalMove]) -> Option<Path>;

    /// Called once the board is dealt.
    fn on_game_start(&mut self, _view: &GameView<'_>) {}

    /// Called when the game finishes.
    fn on_game_end(&mut self, _winner: PlayerId) {}
}

// =============================================================================
// Manual
// =============================================================================

/// Pointer-driven player: plays paths queued by a UI.
///
/// The UI reads [`ManualStrategy::offered`] to highlight destinations and
/// calls [`ManualStrategy::select`] when the user picks one.
#[derive(Clone, Debug)]
pub struct ManualStrategy {
    name: String,
    offered: Vec<LegalMove>,
    selected: VecDeque<Path>,
}

impl ManualStrategy {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            offered: Vec::new(),
            selected: VecDeque::new(),
        }
    }

    /// Queue a path to play on a future turn.
    pub fn select(&mut self, path: impl Into<Path>) {
        self.selected.push_back(path.into());
    }

    /// Moves offered on the most recent turn.
    #[must_use]
    pub fn offered(&self) -> &[LegalMove] {
        &self.offered
    }
}

impl Strategy for ManualStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, _view: &GameView<'_>, moves: &[LegalMove]) -> Option<Path> {
        self.offered = moves.to_vec();
        self.selected.pop_front()
    }
}

// =============================================================================
// Random
// =============================================================================

/// Picks uniformly among legal destinations.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    name: String,
    rng: GameRng,
}

impl RandomStrategy {
    pub fn new(name: impl Into<String>, rng: GameRng) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }

    /// Seeded random player named after its seat.
    #[must_use]
    pub fn for_player(player: PlayerId, seed: u64) -> Self {
        let rng = GameRng::new(seed).for_context(&format!("player-{}", player.0));
        Self::new(format!("Random AI {}", player.0 + 1), rng)
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, _view: &GameView<'_>, moves: &[LegalMove]) -> Option<Path> {
        self.rng.choose(moves).map(|mv| mv.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Position};
    use crate::cards::{Card, CardValue};
    use crate::core::PlayerMap;
    use crate::rules::enumerate_moves;

    fn board() -> Board {
        Board::from_cards(
            4,
            std::iter::repeat(Card::new(CardValue::Ace)).take(16),
            PlayerMap::from_pair(Position::new(0, 0), Position::new(2, 2)),
        )
        .unwrap()
    }

    fn view(board: &Board) -> GameView<'_> {
        GameView {
            board,
            player: PlayerId::FIRST,
            required_steps: 1,
            turn: 0,
        }
    }

    #[test]
    fn test_manual_plays_queue_in_order() {
        let board = board();
        let moves = enumerate_moves(&board, Position::new(0, 0), 1, PlayerId::FIRST);
        let mut manual = ManualStrategy::new("Human");

        assert_eq!(manual.choose_move(&view(&board), &moves), None);
        assert_eq!(manual.offered(), moves.as_slice());

        manual.select(vec![Position::new(0, 1)]);
        manual.select(vec![Position::new(1, 0)]);
        assert_eq!(
            manual.choose_move(&view(&board), &moves),
            Some(Path::from_slice(&[Position::new(0, 1)]))
        );
        assert_eq!(
            manual.choose_move(&view(&board), &moves),
            Some(Path::from_slice(&[Position::new(1, 0)]))
        );
    }

    #[test]
    fn test_random_picks_a_legal_move() {
        let board = board();
        let moves = enumerate_moves(&board, Position::new(0, 0), 1, PlayerId::FIRST);
        let mut random = RandomStrategy::for_player(PlayerId::FIRST, 3);

        for _ in 0..20 {
            let path = random.choose_move(&view(&board), &moves).unwrap();
            assert!(moves.iter().any(|m| m.path == path));
        }
        assert_eq!(random.choose_move(&view(&board), &[]), None);
    }

    #[test]
    fn test_random_is_seeded() {
        let board = board();
        let moves = enumerate_moves(&board, Position::new(0, 0), 1, PlayerId::FIRST);
        let mut a = RandomStrategy::for_player(PlayerId::SECOND, 8);
        let mut b = RandomStrategy::for_player(PlayerId::SECOND, 8);

        let picks_a: Vec<_> = (0..10).map(|_| a.choose_move(&view(&board), &moves)).collect();
        let picks_b: Vec<_> = (0..10).map(|_| b.choose_move(&view(&board), &moves)).collect();
        assert_eq!(picks_a, picks_b);
        assert_eq!(a.name(), "Random AI 2");
    }
}
