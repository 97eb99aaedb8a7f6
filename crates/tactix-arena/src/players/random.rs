use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tactix_core::Side;

use crate::{
    error::ArenaError,
    player::{Player, TrackedGame},
};

/// Plays a uniformly random free field, with a deterministic seeded RNG so
/// matches are reproducible.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    game: TrackedGame,
    rng: ChaCha8Rng,
}

impl RandomPlayer {
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        RandomPlayer {
            name: name.into(),
            game: TrackedGame::new(Side::X),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
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
        if free.is_empty() {
            return Err(ArenaError::MoveInFinishedGame {
                player: self.name.clone(),
            });
        }
        let field = free[self.rng.gen_range(0..free.len())];
        self.game.register(field)?;
        Ok(field)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
