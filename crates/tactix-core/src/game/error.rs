use thiserror::Error;

use crate::game::board::Side;

/// Error type for move application and state transitions.
///
/// Every variant signals a bug in the caller (a strategy or the match loop),
/// so illegal moves are always surfaced and never silently corrected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("field {field} is outside 1..9")]
    FieldOutOfRange { field: u8 },

    #[error("field {field} already holds {mark}")]
    FieldOccupied { field: u8, mark: Side },

    #[error("{side} tried to move but it is {turn}'s turn")]
    WrongTurn { side: Side, turn: Side },

    #[error("the game is already decided, no further moves are legal")]
    GameOver,
}
