use std::collections::BTreeMap;

use crate::game::{Board, GameError, GameState};
use crate::stats::{source::StatsSource, statistics::Statistics};

#[derive(Debug, Clone)]
/// Complete statistics gathered by exhaustively playing every legal game.
///
/// The enumeration walks every move sequence from the empty board to
/// completion, without deduplicating transpositions along the way. Each
/// finished game credits its outcome to every board on that particular
/// sequence, the empty starting board included, so a board reached by many
/// sequences accumulates one count per sequence passing through it. The
/// resulting ratios describe the outcome distribution when both sides play
/// uniformly at random from that position onward.
pub struct CompleteStatistics {
    map: BTreeMap<Board, Statistics>,
}

impl CompleteStatistics {
    /// Enumerate all games and accumulate the per-board counters.
    pub fn generate() -> Result<Self, GameError> {
        let mut map = BTreeMap::new();
        let mut path = Vec::with_capacity(10);
        enumerate(&mut map, &mut path, GameState::new())?;
        Ok(CompleteStatistics { map })
    }

    /// Number of distinct boards that received at least one sample.
    pub fn board_count(&self) -> usize {
        self.map.len()
    }

    /// Iterate all `(board, statistics)` entries in board key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Board, &Statistics)> {
        self.map.iter()
    }
}

impl StatsSource for CompleteStatistics {
    fn lookup(&self, board: &Board) -> Option<Statistics> {
        self.map.get(board).copied()
    }
}

/// Depth-first over all continuations of `state`. On a finished game the
/// outcome is credited to every board along the current sequence.
///
/// Boards only ever gain marks, so one sequence can never revisit a board
/// and no per-sequence deduplication is needed.
fn enumerate(
    map: &mut BTreeMap<Board, Statistics>,
    path: &mut Vec<Board>,
    state: GameState,
) -> Result<(), GameError> {
    path.push(*state.board());
    if let Some(outcome) = state.winner() {
        for board in path.iter() {
            map.entry(*board).or_default().record(outcome);
        }
    } else {
        for field in state.board().free_fields() {
            enumerate(map, path, state.play(field)?)?;
        }
    }
    path.pop();
    Ok(())
}
