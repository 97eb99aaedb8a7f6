use crate::game::Side;
use crate::tree::{error::TreeError, ids::NodeId, state_tree::StateTree, value::Evaluation};

impl StateTree {
    /// Assign every node its pair of minimax values in a single post-order
    /// pass; each node is visited exactly once.
    ///
    /// Leaves take their value straight from the decided winner. An internal
    /// node aggregates its children per slot: the slot's side takes the
    /// maximum over children when it is the mover here, otherwise the
    /// minimum (the opponent is assumed to play optimally against it).
    pub fn evaluate(&mut self) -> Result<(), TreeError> {
        self.evaluate_node(self.root_id())?;
        Ok(())
    }

    fn evaluate_node(&mut self, node_id: NodeId) -> Result<Evaluation, TreeError> {
        let (turn, winner, children) = {
            let node = self.node(node_id)?;
            let children: Vec<NodeId> = node.children().map(|(_, child)| child).collect();
            (node.state().turn(), node.state().winner(), children)
        };

        let mut children = children.into_iter();
        let value = match children.next() {
            None => {
                // No children means the game is decided right here.
                let outcome = winner.ok_or(TreeError::LeafWithoutWinner { node_id })?;
                Evaluation::terminal(outcome)
            }
            Some(first) => {
                let mut value = self.evaluate_node(first)?;
                for child in children {
                    let candidate = self.evaluate_node(child)?;
                    value.for_x = pick(turn == Side::X, value.for_x, candidate.for_x);
                    value.for_o = pick(turn == Side::O, value.for_o, candidate.for_o);
                }
                value
            }
        };

        self.node_mut(node_id)?.set_value(value);
        Ok(value)
    }
}

/// On the slot side's own turn it picks its best line, otherwise the
/// opponent is choosing and we keep the worst case.
fn pick(maximizing: bool, current: i32, candidate: i32) -> i32 {
    if maximizing {
        current.max(candidate)
    } else {
        current.min(candidate)
    }
}
