use serde::Serialize;

use crate::stats::StatsSource;
use crate::tree::{error::TreeError, index::UniqueStateIndex, state_tree::StateTree};

/// Serializable dump of every distinct reachable position: minimax values
/// side by side with the empirical counters. Outer tooling exports this,
/// the core only captures it.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationSnapshot {
    pub schema_version: u32,
    pub board_count: usize,
    pub boards: Vec<BoardSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardSnapshot {
    pub board: String,
    pub key: u32,
    pub turn: String,
    pub value_for_x: i32,
    pub value_for_o: i32,
    pub win_x: u32,
    pub win_o: u32,
    pub ties: u32,
    pub samples: u32,
}

impl EvaluationSnapshot {
    /// Capture one row per unique board, in board key order.
    pub fn capture(
        tree: &StateTree,
        index: &UniqueStateIndex,
        source: &impl StatsSource,
    ) -> Result<Self, TreeError> {
        let mut boards = Vec::with_capacity(index.len());
        for (board, node_id) in index.iter() {
            let node = tree.node(node_id)?;
            let value = node.value().ok_or(TreeError::Unevaluated { node_id })?;
            let statistics = source.statistics(board);
            boards.push(BoardSnapshot {
                board: board.to_string(),
                key: board.key(),
                turn: node.state().turn().to_string(),
                value_for_x: value.for_x,
                value_for_o: value.for_o,
                win_x: statistics.win_x(),
                win_o: statistics.win_o(),
                ties: statistics.ties(),
                samples: statistics.samples(),
            });
        }
        Ok(EvaluationSnapshot {
            schema_version: 1,
            board_count: boards.len(),
            boards,
        })
    }
}
