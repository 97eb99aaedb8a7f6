use thiserror::Error;

use crate::game::{Board, GameError};
use crate::tree::{ids::NodeId, value::Evaluation};

/// Error type for tree construction, evaluation, and indexing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A move failed while expanding the tree. Expansion only plays free
    /// fields of unfinished states, so hitting this means a model bug.
    #[error("illegal move during tree expansion: {0}")]
    Game(#[from] GameError),

    /// Attempted to access a node id that does not exist in the arena.
    #[error("missing node with id {}", node_id.index())]
    MissingNode { node_id: NodeId },

    /// Asked for a minimax value before the evaluation pass ran.
    #[error("node {} has not been evaluated yet", node_id.index())]
    Unevaluated { node_id: NodeId },

    /// A node without children has no decided winner. Expansion stops
    /// exactly at decided states, so this cannot happen in a correct tree.
    #[error("leaf node {} has no decided winner", node_id.index())]
    LeafWithoutWinner { node_id: NodeId },

    /// Two nodes carry the same board but different evaluations. Minimax
    /// over a deterministic perfect-information game must value equal
    /// boards equally; this falsifies the whole evaluation and is fatal.
    #[error("same board {board}, different evaluations: ({first}) vs ({second})")]
    EvaluationMismatch {
        board: Board,
        first: Evaluation,
        second: Evaluation,
    },
}
