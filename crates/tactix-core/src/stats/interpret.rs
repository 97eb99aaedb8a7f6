use crate::game::Side;
use crate::stats::statistics::Statistics;

/// Reduces a statistics record to a single scalar for ranking candidate
/// moves; higher is better for the given side.
///
/// Each policy is stateless and single-purpose, so callers inject whichever
/// interpretation they want to play or diagnose with.
pub trait StatsInterpreter {
    fn value(&self, side: Side, statistics: &Statistics) -> f64;
}

/// Ranks by the side's raw win ratio.
#[derive(Debug, Default, Clone, Copy)]
pub struct WinRatio;

impl StatsInterpreter for WinRatio {
    fn value(&self, side: Side, statistics: &Statistics) -> f64 {
        statistics.win_ratio(side)
    }
}

/// Ranks by the chance of not losing: one minus the opponent's win ratio.
#[derive(Debug, Default, Clone, Copy)]
pub struct NotLoseRatio;

impl StatsInterpreter for NotLoseRatio {
    fn value(&self, side: Side, statistics: &Statistics) -> f64 {
        1.0 - statistics.win_ratio(side.opponent())
    }
}
