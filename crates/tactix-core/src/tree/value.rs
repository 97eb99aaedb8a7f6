use std::fmt;

use crate::game::{Outcome, Side};

/// Score granted to the winning side at a terminal node. The loser gets the
/// negation, a tie scores zero for both.
pub const WIN_VALUE: i32 = 100;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Minimax evaluation of a position, one slot per side.
///
/// Positive is favorable for that side, negative unfavorable. The two slots
/// are computed independently (each side maximizes on its own turn and is
/// assumed to face a minimizing opponent), which lets one evaluated tree
/// serve players of either side. Internal nodes are therefore not simply
/// negations of each other; only terminal nodes are.
pub struct Evaluation {
    pub for_x: i32,
    pub for_o: i32,
}

impl Evaluation {
    /// The evaluation of a decided game.
    pub fn terminal(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win(Side::X) => Evaluation {
                for_x: WIN_VALUE,
                for_o: -WIN_VALUE,
            },
            Outcome::Win(Side::O) => Evaluation {
                for_x: -WIN_VALUE,
                for_o: WIN_VALUE,
            },
            Outcome::Tie => Evaluation { for_x: 0, for_o: 0 },
        }
    }

    /// The value of this position from `side`'s perspective.
    pub fn value_for(&self, side: Side) -> i32 {
        match side {
            Side::X => self.for_x,
            Side::O => self.for_o,
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X {:+}, O {:+}", self.for_x, self.for_o)
    }
}
