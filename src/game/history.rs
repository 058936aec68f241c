//! Move history and game records.
//!
//! History is append-only: each applied move adds one `MoveRecord` and no
//! record is ever rewritten. Together with the initial deal it is enough to
//! replay a game move for move.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Position};
use crate::core::{GameError, PlayerId};
use crate::rules::Path;

/// One applied move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// Cell the player left (collapsed by this move).
    pub from: Position,

    /// Cell the player landed on.
    pub to: Position,

    /// Every cell stepped on, excluding `from`, ending with `to`.
    pub path: Path,
}

/// A complete game: the deal plus every move in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub initial: Board,
    pub moves: Vec<MoveRecord>,
}

impl GameRecord {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a record produced by [`GameRecord::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
