use tracing::{debug, info};

use tactix_core::{GameState, Outcome, Side};

use crate::{error::ArenaError, player::Player};

/// A single game between two players, umpired by its own game state. The
/// umpire re-validates every move, so a buggy player surfaces as an error
/// instead of corrupting the game.
pub struct Game<'a> {
    player_x: &'a mut dyn Player,
    player_o: &'a mut dyn Player,
}

impl<'a> Game<'a> {
    pub fn new(player_x: &'a mut dyn Player, player_o: &'a mut dyn Player) -> Self {
        Game { player_x, player_o }
    }

    /// Run the game to completion and return its outcome.
    pub fn run(&mut self) -> Result<Outcome, ArenaError> {
        let mut state = GameState::new();
        self.player_x.before_game(Side::X)?;
        self.player_o.before_game(Side::O)?;

        loop {
            if let Some(outcome) = state.winner() {
                info!(?outcome, "game finished");
                return Ok(outcome);
            }

            let turn = state.turn();
            let field = match turn {
                Side::X => self.player_x.choose_move()?,
                Side::O => self.player_o.choose_move()?,
            };
            state = state.play_as(turn, field)?;
            debug!(side = %turn, field, "move played");

            match turn {
                Side::X => self.player_o.opponent_moved(field)?,
                Side::O => self.player_x.opponent_moved(field)?,
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Accumulated match score: two points per win, one each per tie.
pub struct MatchScore {
    pub player1: u32,
    pub player2: u32,
}

/// A match: a series of rounds, each round playing two games so both
/// players take both sides.
pub struct Match {
    rounds: usize,
}

impl Match {
    pub fn new(rounds: usize) -> Self {
        Match { rounds }
    }

    pub fn run(
        &self,
        player1: &mut dyn Player,
        player2: &mut dyn Player,
    ) -> Result<MatchScore, ArenaError> {
        info!(
            player1 = player1.name(),
            player2 = player2.name(),
            rounds = self.rounds,
            "starting match"
        );
        player1.before_match();
        player2.before_match();

        let mut score = MatchScore::default();
        for round in 1..=self.rounds {
            let outcome = Game::new(&mut *player1, &mut *player2).run()?;
            credit(outcome, &mut score.player1, &mut score.player2);

            let outcome = Game::new(&mut *player2, &mut *player1).run()?;
            credit(outcome, &mut score.player2, &mut score.player1);

            debug!(
                round,
                score1 = score.player1,
                score2 = score.player2,
                "round finished"
            );
        }

        info!(
            player1 = player1.name(),
            score1 = score.player1,
            player2 = player2.name(),
            score2 = score.player2,
            "match finished"
        );
        Ok(score)
    }
}

/// Two points for a win, one each for a tie.
fn credit(outcome: Outcome, score_x: &mut u32, score_o: &mut u32) {
    match outcome {
        Outcome::Win(Side::X) => *score_x += 2,
        Outcome::Win(Side::O) => *score_o += 2,
        Outcome::Tie => {
            *score_x += 1;
            *score_o += 1;
        }
    }
}
