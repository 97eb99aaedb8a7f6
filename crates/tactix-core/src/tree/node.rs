use crate::game::{Board, GameState};
use crate::tree::{ids::NodeId, value::Evaluation};

#[derive(Debug, Clone)]
/// One position in the exhaustive game tree.
///
/// `children[i]` is the node reached by playing field `i + 1`, absent when
/// that field was already occupied here or when this node is terminal.
/// Nodes exclusively own their subtrees: two nodes may well carry equal
/// boards (transpositions), and that equality is reconciled only by the
/// unique-state index, never by sharing nodes.
pub struct StateNode {
    state: GameState,
    children: [Option<NodeId>; 9],
    value: Option<Evaluation>,
}

impl StateNode {
    /// Create an unexpanded, unevaluated node for `state`.
    pub(crate) fn new(state: GameState) -> Self {
        StateNode {
            state,
            children: [None; 9],
            value: None,
        }
    }

    /// The game state at this node.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The board at this node.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// The child reached by playing `field`, if that move exists here.
    pub fn child(&self, field: u8) -> Option<NodeId> {
        match field {
            1..=9 => self.children[(field - 1) as usize],
            _ => None,
        }
    }

    /// Iterate present children as `(field, node_id)` pairs, field order.
    pub fn children(&self) -> impl Iterator<Item = (u8, NodeId)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(index, child)| child.map(|id| (index as u8 + 1, id)))
    }

    /// Whether this node has no children, i.e. the game is decided here.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(|child| child.is_none())
    }

    /// The minimax evaluation, present only after the evaluation pass.
    pub fn value(&self) -> Option<Evaluation> {
        self.value
    }

    /// `field` must be a valid field number; callers pass fields coming
    /// from `free_fields`.
    pub(crate) fn set_child(&mut self, field: u8, child: NodeId) {
        debug_assert!((1..=9).contains(&field));
        self.children[(field - 1) as usize] = Some(child);
    }

    pub(crate) fn set_value(&mut self, value: Evaluation) {
        self.value = Some(value);
    }
}
