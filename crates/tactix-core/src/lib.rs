mod diag;
mod game;
mod stats;
mod tree;

pub use diag::{DiagnosticReport, Warning, check_node, diagnose};
pub use game::{Board, Coords, GameError, GameState, Outcome, Side};
pub use stats::{CompleteStatistics, NotLoseRatio, StatsInterpreter, StatsSource, Statistics, WinRatio};
pub use tree::error::TreeError;
pub use tree::ids::NodeId;
pub use tree::{BoardSnapshot, Evaluation, EvaluationSnapshot, StateNode, StateTree, UniqueStateIndex, WIN_VALUE};
