use crate::game::Board;
use crate::stats::statistics::Statistics;

/// Source of per-board statistics for statistics-driven move selection.
///
/// Statistics are advisory, not authoritative: a board the source never saw
/// yields the zero-sample record rather than an error.
pub trait StatsSource {
    /// The statistics recorded for `board`, if any were.
    fn lookup(&self, board: &Board) -> Option<Statistics>;

    /// The statistics for `board`, falling back to the zero-sample record.
    fn statistics(&self, board: &Board) -> Statistics {
        self.lookup(board).unwrap_or_default()
    }
}
