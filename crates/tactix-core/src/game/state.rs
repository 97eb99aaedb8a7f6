use std::fmt;

use crate::game::{
    board::{Board, Outcome, Side},
    error::GameError,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Full state of a game: the board, whose turn it is, and the winner once
/// decided.
///
/// States are values. Deriving the next state copies the board, applies one
/// move for the side currently on turn, and flips the turn; the parent state
/// is never touched. The winner is determined at construction so a finished
/// state can never accept further moves.
pub struct GameState {
    board: Board,
    turn: Side,
    winner: Option<Outcome>,
}

impl GameState {
    /// The starting state: empty board, X to move.
    pub fn new() -> Self {
        GameState {
            board: Board::empty(),
            turn: Side::X,
            winner: None,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side on turn. Meaningless once the game is finished.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// The winner (or tie) if the game is decided, `None` while in progress.
    pub fn winner(&self) -> Option<Outcome> {
        self.winner
    }

    /// Whether the game is over.
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Derive the state after the side on turn plays `field`.
    pub fn play(&self, field: u8) -> Result<GameState, GameError> {
        if self.winner.is_some() {
            return Err(GameError::GameOver);
        }
        let board = self.board.apply(self.turn, field)?;
        Ok(GameState {
            board,
            turn: self.turn.opponent(),
            winner: board.winner(),
        })
    }

    /// Like `play`, but also checks that `side` really is on turn.
    pub fn play_as(&self, side: Side, field: u8) -> Result<GameState, GameError> {
        if side != self.turn {
            return Err(GameError::WrongTurn {
                side,
                turn: self.turn,
            });
        }
        self.play(field)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            Some(Outcome::Win(side)) => write!(f, "{} ({side} won)", self.board),
            Some(Outcome::Tie) => write!(f, "{} (tie)", self.board),
            None => write!(f, "{} ({} to move)", self.board, self.turn),
        }
    }
}
