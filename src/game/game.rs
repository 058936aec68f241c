//! The turn state machine.
//!
//! ```text
//! NotStarted --start()--> InProgress --(mover has no legal move)--> Finished
//! ```
//!
//! After every applied move the engine checks whether the player now to
//! move has any legal path. If not, the game finishes and the player who
//! just moved wins. The same check runs once at the start, so a caller is
//! never asked to move in a position that has no moves.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::history::{GameRecord, MoveRecord};
use crate::board::{Board, Position};
use crate::core::{GameConfig, GameError, GameRng, IllegalMove, PlayerId};
use crate::rules::{enumerate_moves, enumerate_paths, has_legal_move, validate, LegalMove, Path};

/// Lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    NotStarted,
    InProgress,
    Finished,
}

/// Read-only turn context handed to strategies.
#[derive(Clone, Copy, Debug)]
pub struct GameView<'a> {
    pub board: &'a Board,
    pub player: PlayerId,
    pub required_steps: usize,
    pub turn: usize,
}

impl GameView<'_> {
    /// Where the player to move stands.
    #[must_use]
    pub fn position(&self) -> Position {
        self.board.player_position(self.player)
    }

    /// Where the other player stands.
    #[must_use]
    pub fn opponent_position(&self) -> Position {
        self.board.player_position(self.player.opponent())
    }
}

/// A game of Collapsi.
///
/// ## Example
///
/// ```
/// use collapsi::{Game, GameConfig};
///
/// let mut game = Game::new(GameConfig::default().with_seed(7));
/// game.start().unwrap();
///
/// while !game.is_over() {
///     let moves = game.valid_moves().unwrap();
///     game.apply_move(&moves[0].path).unwrap();
/// }
/// assert!(game.winner().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Option<Board>,
    initial: Option<Board>,
    current_player: PlayerId,
    state: GameState,
    winner: Option<PlayerId>,
    history: Vector<MoveRecord>,
}

impl Game {
    /// Create an unstarted game. Nothing is dealt until [`Game::start`].
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            board: None,
            initial: None,
            current_player: PlayerId::FIRST,
            state: GameState::NotStarted,
            winner: None,
            history: Vector::new(),
        }
    }

    /// Start from a fixed board instead of a shuffled deal.
    ///
    /// Player 0 moves first. The game may be finished immediately if
    /// player 0 has no legal move.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        let config = GameConfig::default().with_board_size(board.size());
        let mut game = Self::new(config);
        game.begin(board);
        game
    }

    /// Rebuild a game by replaying a record from its initial deal.
    ///
    /// Every recorded move must be legal and attributed to the right player.
    pub fn replay(record: &GameRecord) -> Result<Self, GameError> {
        let mut game = Self::from_board(record.initial.clone());
        for (turn, mv) in record.moves.iter().enumerate() {
            if game.current_player != mv.player || game.state != GameState::InProgress {
                return Err(GameError::ReplayMismatch { turn });
            }
            let applied = game.apply_move(&mv.path)?;
            if applied.from != mv.from || applied.to != mv.to {
                return Err(GameError::ReplayMismatch { turn });
            }
        }
        Ok(game)
    }

    /// Deal the board and hand the first turn to player 0.
    ///
    /// Fails with `AlreadyStarted` on a second call, or with a configuration
    /// error before anything is dealt.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.state != GameState::NotStarted {
            return Err(GameError::AlreadyStarted);
        }
        self.config.validate()?;

        let mut rng = GameRng::new(self.config.seed).for_context("deal");
        let board = Board::deal(self.config.board_size, &self.config.deck, &mut rng)?;
        info!(
            seed = self.config.seed,
            size = self.config.board_size,
            "dealt board\n{board}"
        );
        self.begin(board);
        Ok(())
    }

    fn begin(&mut self, board: Board) {
        self.initial = Some(board.clone());
        self.board = Some(board);
        self.current_player = PlayerId::FIRST;
        self.state = GameState::InProgress;
        self.check_terminal();
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state == GameState::Finished
    }

    /// The winner, set only once the game is finished.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// The live board.
    pub fn board(&self) -> Result<&Board, GameError> {
        self.board.as_ref().ok_or(GameError::NotStarted)
    }

    /// Every move applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Number of moves applied.
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len()
    }

    pub fn current_player_position(&self) -> Result<Position, GameError> {
        Ok(self.board()?.player_position(self.current_player))
    }

    /// Steps the player to move must take: the value of the card under them.
    pub fn required_steps(&self) -> Result<usize, GameError> {
        let board = self.board()?;
        Ok(board.get_card(board.player_position(self.current_player)).steps())
    }

    /// Legal destinations for the player to move, one path each.
    ///
    /// Empty once the game is finished.
    pub fn valid_moves(&self) -> Result<Vec<LegalMove>, GameError> {
        let board = self.board()?;
        let start = board.player_position(self.current_player);
        Ok(enumerate_moves(board, start, self.required_steps()?, self.current_player))
    }

    /// Every legal path for the player to move, including several paths to
    /// the same destination.
    pub fn valid_paths(&self) -> Result<Vec<Path>, GameError> {
        let board = self.board()?;
        let start = board.player_position(self.current_player);
        Ok(enumerate_paths(board, start, self.required_steps()?, self.current_player))
    }

    /// Read-only context for the player to move.
    pub fn view(&self) -> Result<GameView<'_>, GameError> {
        Ok(GameView {
            board: self.board()?,
            player: self.current_player,
            required_steps: self.required_steps()?,
            turn: self.turn(),
        })
    }

    /// Initial deal plus history, or `None` before the game starts.
    #[must_use]
    pub fn record(&self) -> Option<GameRecord> {
        Some(GameRecord {
            initial: self.initial.clone()?,
            moves: self.history.iter().cloned().collect(),
        })
    }

    /// Apply a move for the player to move.
    ///
    /// `path` lists every cell stepped on, ending at the destination. On
    /// any error nothing changes. On success the origin collapses, the
    /// token moves, the move is recorded, the turn passes, and the game
    /// finishes if the next player has no legal move.
    pub fn apply_move(&mut self, path: &[Position]) -> Result<MoveRecord, GameError> {
        match self.state {
            GameState::NotStarted => return Err(GameError::NotStarted),
            GameState::Finished => return Err(GameError::GameOver),
            GameState::InProgress => {}
        }

        let player = self.current_player;
        let from = self.current_player_position()?;
        let expected = self.required_steps()?;
        let board = self.board.as_mut().ok_or(GameError::NotStarted)?;

        let checked = if path.len() == expected || path.is_empty() {
            validate(board, from, path, player)
        } else {
            Err(IllegalMove::WrongLength {
                expected,
                actual: path.len(),
            })
        };
        if let Err(reason) = checked {
            debug!(%player, %reason, "rejected move");
            return Err(reason.into());
        }

        // validate() rejects empty paths
        let to = path[path.len() - 1];
        board.collapse(from);
        board.move_player(player, to);

        let record = MoveRecord {
            player,
            from,
            to,
            path: Path::from_slice(path),
        };
        self.history.push_back(record.clone());
        self.current_player = player.opponent();
        debug!(%player, %from, %to, turn = self.history.len(), "applied move");

        self.check_terminal();
        Ok(record)
    }

    /// Apply one of the moves returned by [`Game::valid_moves`].
    pub fn apply(&mut self, mv: &LegalMove) -> Result<MoveRecord, GameError> {
        self.apply_move(&mv.path)
    }

    fn check_terminal(&mut self) {
        let Some(board) = self.board.as_ref() else {
            return;
        };
        let player = self.current_player;
        let start = board.player_position(player);
        let steps = board.get_card(start).steps();
        if !has_legal_move(board, start, steps, player) {
            let winner = player.opponent();
            self.state = GameState::Finished;
            self.winner = Some(winner);
            info!(%winner, turns = self.history.len(), "game over");
        }
    }
}
