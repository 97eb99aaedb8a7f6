use thiserror::Error;

use tactix_core::{GameError, TreeError};

/// Error type for running games and matches between players.
#[derive(Debug, Error)]
pub enum ArenaError {
    /// A player produced a move the umpire rejected.
    #[error("illegal move: {0}")]
    Game(#[from] GameError),

    /// The pre-computed state tree failed underneath a player.
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// A player was asked to move with no free field left.
    #[error("player {player} was asked to move in a finished game")]
    MoveInFinishedGame { player: String },

    /// A tree-walking player got a move its current node has no child for.
    #[error("player {player} walked off the state tree at field {field}")]
    OffTree { player: String, field: u8 },

    /// A player was asked to move while its own bookkeeping says it is the
    /// opponent's turn.
    #[error("player {player} is out of step with the game it is tracking")]
    TurnMismatch { player: String },
}
