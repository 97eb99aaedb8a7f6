use tactix_core::{NodeId, Side, StateTree, TreeError};

use crate::{error::ArenaError, player::Player};

/// Perfect player backed by the pre-computed, fully evaluated state tree.
///
/// During a game it simply walks down the tree: on the opponent's move it
/// follows the chosen branch, on its own move it descends into the child
/// with the best value for its side.
pub struct MinimaxPlayer {
    name: String,
    tree: StateTree,
    current: NodeId,
    side: Side,
}

impl MinimaxPlayer {
    /// Build and evaluate the full state tree up front.
    pub fn new(name: impl Into<String>) -> Result<Self, ArenaError> {
        let tree = StateTree::evaluated()?;
        let current = tree.root_id();
        Ok(MinimaxPlayer {
            name: name.into(),
            tree,
            current,
            side: Side::X,
        })
    }

    /// Move down the tree along `field`, ours or the opponent's.
    fn descend(&mut self, field: u8) -> Result<(), ArenaError> {
        let child = self
            .tree
            .node(self.current)?
            .child(field)
            .ok_or_else(|| ArenaError::OffTree {
                player: self.name.clone(),
                field,
            })?;
        self.current = child;
        Ok(())
    }
}

impl Player for MinimaxPlayer {
    fn before_game(&mut self, side: Side) -> Result<(), ArenaError> {
        self.current = self.tree.root_id();
        self.side = side;
        Ok(())
    }

    fn opponent_moved(&mut self, field: u8) -> Result<(), ArenaError> {
        self.descend(field)
    }

    fn choose_move(&mut self) -> Result<u8, ArenaError> {
        let node = self.tree.node(self.current)?;
        if node.state().turn() != self.side {
            return Err(ArenaError::TurnMismatch {
                player: self.name.clone(),
            });
        }

        let mut best: Option<(u8, i32)> = None;
        for (field, child_id) in node.children() {
            let child = self.tree.node(child_id)?;
            let value = child
                .value()
                .ok_or(TreeError::Unevaluated { node_id: child_id })?
                .value_for(self.side);
            // First-found maximum wins ties, matching the field order.
            best = match best {
                Some((best_field, best_value)) if best_value >= value => {
                    Some((best_field, best_value))
                }
                _ => Some((field, value)),
            };
        }

        let (field, _) = best.ok_or_else(|| ArenaError::MoveInFinishedGame {
            player: self.name.clone(),
        })?;
        self.descend(field)?;
        Ok(field)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
