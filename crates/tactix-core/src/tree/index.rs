use std::collections::BTreeMap;

use crate::game::Board;
use crate::tree::{
    error::TreeError, ids::NodeId, state_tree::StateTree, value::Evaluation,
};

#[derive(Debug, Clone)]
/// Canonical-board index over an evaluated tree.
///
/// Many move orders transpose to the same board; this index buckets all
/// tree nodes by board content and keeps one representative node per
/// distinct reachable position. Building it doubles as a consistency
/// check: nodes sharing a board must share an evaluation, and a mismatch
/// aborts with [`TreeError::EvaluationMismatch`] instead of picking one.
pub struct UniqueStateIndex {
    map: BTreeMap<Board, NodeId>,
}

impl UniqueStateIndex {
    /// Walk every node of `tree` and bucket them by canonical board.
    ///
    /// Fails if any node is unevaluated or if transposed nodes disagree on
    /// their evaluation.
    pub fn build(tree: &StateTree) -> Result<Self, TreeError> {
        let mut map: BTreeMap<Board, NodeId> = BTreeMap::new();
        for (node_id, node) in tree.nodes() {
            let value = node.value().ok_or(TreeError::Unevaluated { node_id })?;
            match map.get(node.board()) {
                Some(&existing_id) => {
                    let existing = tree.node(existing_id)?;
                    let existing_value = existing.value().ok_or(TreeError::Unevaluated {
                        node_id: existing_id,
                    })?;
                    if existing_value != value {
                        return Err(TreeError::EvaluationMismatch {
                            board: *node.board(),
                            first: existing_value,
                            second: value,
                        });
                    }
                }
                None => {
                    map.insert(*node.board(), node_id);
                }
            }
        }
        Ok(UniqueStateIndex { map })
    }

    /// Number of distinct reachable boards.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The representative node for `board`, if the board is reachable.
    pub fn get(&self, board: &Board) -> Option<NodeId> {
        self.map.get(board).copied()
    }

    /// The minimax value pair for `board`, if reachable.
    pub fn value_of(&self, tree: &StateTree, board: &Board) -> Option<Evaluation> {
        self.get(board)
            .and_then(|node_id| tree.node(node_id).ok())
            .and_then(|node| node.value())
    }

    /// Iterate `(board, representative node id)` in board key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Board, NodeId)> {
        self.map.iter().map(|(board, node_id)| (board, *node_id))
    }
}
