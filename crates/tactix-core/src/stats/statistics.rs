use serde::{Deserialize, Serialize};

use crate::game::{Outcome, Side};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Win/tie counters for one board position.
///
/// Counters only ever go up; a record accumulates one count per complete
/// game whose move sequence passed through this board.
pub struct Statistics {
    win_x: u32,
    win_o: u32,
    ties: u32,
}

impl Statistics {
    /// A zero-sample record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished game that passed through this position.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Side::X) => self.win_x += 1,
            Outcome::Win(Side::O) => self.win_o += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    /// Games won by X.
    pub fn win_x(&self) -> u32 {
        self.win_x
    }

    /// Games won by O.
    pub fn win_o(&self) -> u32 {
        self.win_o
    }

    /// Games that ended in a tie.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Games won by `side`.
    pub fn wins_for(&self, side: Side) -> u32 {
        match side {
            Side::X => self.win_x,
            Side::O => self.win_o,
        }
    }

    /// Total games recorded for this position.
    pub fn samples(&self) -> u32 {
        self.win_x + self.win_o + self.ties
    }

    /// Fraction of recorded games won by `side`; zero when no samples.
    pub fn win_ratio(&self, side: Side) -> f64 {
        let samples = self.samples();
        if samples == 0 {
            0.0
        } else {
            f64::from(self.wins_for(side)) / f64::from(samples)
        }
    }
}
