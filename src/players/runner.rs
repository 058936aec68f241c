//! Drives a game between two strategies.

use tracing::{debug, info};

use super::strategy::Strategy;
use crate::core::{GameError, PlayerId, PlayerMap};
use crate::game::{Game, GameRecord, GameState};

/// Result of a finished match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchOutcome {
    pub winner: PlayerId,
    pub turns: usize,
    pub record: GameRecord,
}

/// Play `game` to completion, asking each seat's strategy for its moves.
///
/// Starts the game if it has not been started. Fails if a strategy
/// forfeits while it has legal moves or returns an illegal path; the game
/// is left as it was before that turn.
pub fn play_match(
    game: &mut Game,
    strategies: &mut PlayerMap<Box<dyn Strategy>>,
) -> Result<MatchOutcome, GameError> {
    if game.state() == GameState::NotStarted {
        game.start()?;
    }

    {
        let view = game.view()?;
        for (_, strategy) in strategies.iter_mut() {
            strategy.on_game_start(&view);
        }
    }

    while !game.is_over() {
        let player = game.current_player();
        let moves = game.valid_moves()?;
        let strategy = &mut strategies[player];

        let path = {
            let view = game.view()?;
            strategy.choose_move(&view, &moves)
        }
        .ok_or(GameError::StrategyForfeit { player })?;

        debug!(strategy = strategy.name(), options = moves.len(), "chose move");
        game.apply_move(&path)?;
    }

    let winner = game.winner().ok_or(GameError::NotStarted)?;
    for (_, strategy) in strategies.iter_mut() {
        strategy.on_game_end(winner);
    }
    info!(%winner, name = strategies[winner].name(), turns = game.turn(), "match finished");

    Ok(MatchOutcome {
        winner,
        turns: game.turn(),
        record: game.record().ok_or(GameError::NotStarted)?,
    })
}
