use crate::game::GameState;
use crate::tree::{arena::Arena, error::TreeError, ids::NodeId, node::StateNode};

#[derive(Debug, Clone)]
/// The exhaustive game tree, stored in an arena with the root (empty board,
/// X to move) always at index 0.
///
/// Construction expands every reachable position down to every terminal
/// leaf. Tic-Tac-Toe bounds the tree at 9 plies and 549,946 nodes, so plain
/// recursion and full enumeration are fine; there is deliberately no
/// pruning, no depth limit, and no transposition sharing.
pub struct StateTree {
    arena: Arena<StateNode>,
}

impl StateTree {
    /// Build the full tree from the empty board.
    pub fn build() -> Result<Self, TreeError> {
        let mut arena = Arena::new();
        expand(&mut arena, GameState::new())?;
        Ok(StateTree { arena })
    }

    /// Build the full tree and run the minimax pass: the usual entry point.
    pub fn evaluated() -> Result<Self, TreeError> {
        let mut tree = Self::build()?;
        tree.evaluate()?;
        Ok(tree)
    }

    /// The root node id.
    pub fn root_id(&self) -> NodeId {
        NodeId::from(0)
    }

    /// How many nodes exist in the tree.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// How many leaves the tree has; one per distinct complete game.
    pub fn leaf_count(&self) -> usize {
        self.arena.iter().filter(|node| node.is_leaf()).count()
    }

    /// Return an immutable node handle.
    pub fn node(&self, node_id: NodeId) -> Result<&StateNode, TreeError> {
        self.arena
            .get(node_id)
            .ok_or(TreeError::MissingNode { node_id })
    }

    /// Return a mutable node handle.
    pub(crate) fn node_mut(&mut self, node_id: NodeId) -> Result<&mut StateNode, TreeError> {
        self.arena
            .get_mut(node_id)
            .ok_or(TreeError::MissingNode { node_id })
    }

    /// Iterate all nodes as `(node_id, node)` in allocation order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &StateNode)> {
        self.arena
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId::from(index), node))
    }
}

/// Allocate a node for `state` and recursively create one child per free
/// field. States with a decided winner get no children.
fn expand(arena: &mut Arena<StateNode>, state: GameState) -> Result<NodeId, TreeError> {
    let node_id = arena.allocate(StateNode::new(state));
    if state.winner().is_none() {
        for field in state.board().free_fields() {
            let child_state = state.play(field)?;
            let child_id = expand(arena, child_state)?;
            arena
                .get_mut(node_id)
                .ok_or(TreeError::MissingNode { node_id })?
                .set_child(field, child_id);
        }
    }
    Ok(node_id)
}
