use tactix_core::Side;

use crate::{
    error::ArenaError,
    player::{Player, TrackedGame},
};

/// Always takes the lowest-numbered free field.
#[derive(Debug, Clone)]
pub struct SequentialPlayer {
    name: String,
    game: TrackedGame,
}

impl SequentialPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        SequentialPlayer {
            name: name.into(),
            game: TrackedGame::new(Side::X),
        }
    }
}

impl Player for SequentialPlayer {
    fn before_game(&mut self, side: Side) -> Result<(), ArenaError> {
        self.game = TrackedGame::new(side);
        Ok(())
    }

    fn opponent_moved(&mut self, field: u8) -> Result<(), ArenaError> {
        self.game.register(field)?;
        Ok(())
    }

    fn choose_move(&mut self) -> Result<u8, ArenaError> {
        let free = self.game.free_fields();
        let field = *free.first().ok_or_else(|| ArenaError::MoveInFinishedGame {
            player: self.name.clone(),
        })?;
        self.game.register(field)?;
        Ok(field)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
