use tactix_core::{GameError, GameState, Side};

use crate::error::ArenaError;

/// A move-making strategy. The arena drives every implementation through
/// this trait; players never touch the umpire's state directly.
pub trait Player {
    /// Called once before a match (a series of games) starts.
    fn before_match(&mut self) {}

    /// Called before each game; `side` is the side this player takes.
    fn before_game(&mut self, side: Side) -> Result<(), ArenaError>;

    /// Report the opponent's move so the player can track the game.
    fn opponent_moved(&mut self, field: u8) -> Result<(), ArenaError>;

    /// Produce this player's next move, a field number 1..9.
    fn choose_move(&mut self) -> Result<u8, ArenaError>;

    /// Name shown in logs and score lines.
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Copy)]
/// A player's private view of the game in progress: its side plus a state
/// it replays every move (its own and the opponent's) onto.
pub struct TrackedGame {
    state: GameState,
    side: Side,
}

impl TrackedGame {
    /// Start tracking a fresh game in which we play `side`.
    pub fn new(side: Side) -> Self {
        TrackedGame {
            state: GameState::new(),
            side,
        }
    }

    /// The side this player holds.
    pub fn side(&self) -> Side {
        self.side
    }

    /// The tracked game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Free fields available right now, ascending.
    pub fn free_fields(&self) -> Vec<u8> {
        self.state.board().free_fields()
    }

    /// Replay a move (ours or the opponent's) onto the tracked state.
    pub fn register(&mut self, field: u8) -> Result<(), GameError> {
        self.state = self.state.play(field)?;
        Ok(())
    }
}
