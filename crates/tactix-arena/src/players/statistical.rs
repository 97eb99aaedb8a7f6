use tactix_core::{Side, StatsInterpreter, StatsSource};

use crate::{
    error::ArenaError,
    player::{Player, TrackedGame},
    selector::EqualMoveSelector,
};

/// Ranks each candidate move by the interpreted statistics of the board it
/// leads to, then lets the injected selector break ties.
pub struct StatisticalPlayer<S, I, M> {
    name: String,
    source: S,
    interpreter: I,
    selector: M,
    game: TrackedGame,
}

impl<S, I, M> StatisticalPlayer<S, I, M>
where
    S: StatsSource,
    I: StatsInterpreter,
    M: EqualMoveSelector,
{
    pub fn new(name: impl Into<String>, source: S, interpreter: I, selector: M) -> Self {
        StatisticalPlayer {
            name: name.into(),
            source,
            interpreter,
            selector,
            game: TrackedGame::new(Side::X),
        }
    }
}

impl<S, I, M> Player for StatisticalPlayer<S, I, M>
where
    S: StatsSource,
    I: StatsInterpreter,
    M: EqualMoveSelector,
{
    fn before_game(&mut self, side: Side) -> Result<(), ArenaError> {
        self.game = TrackedGame::new(side);
        Ok(())
    }

    fn opponent_moved(&mut self, field: u8) -> Result<(), ArenaError> {
        self.game.register(field)?;
        Ok(())
    }

    fn choose_move(&mut self) -> Result<u8, ArenaError> {
        let side = self.game.side();
        let board = *self.game.state().board();

        let mut best: Vec<u8> = Vec::new();
        let mut best_value = f64::MIN;
        for field in self.game.free_fields() {
            let preview = board.apply(side, field)?;
            let scalar = self
                .interpreter
                .value(side, &self.source.statistics(&preview));
            if best.is_empty() || scalar > best_value {
                best.clear();
                best.push(field);
                best_value = scalar;
            } else if scalar == best_value {
                best.push(field);
            }
        }

        let field = self
            .selector
            .select(&best)
            .ok_or_else(|| ArenaError::MoveInFinishedGame {
                player: self.name.clone(),
            })?;
        self.game.register(field)?;
        Ok(field)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
