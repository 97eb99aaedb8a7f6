mod arena;
pub mod error;
pub mod ids;
mod index;
mod minimax;
mod node;
mod snapshot;
mod state_tree;
mod value;

pub use index::UniqueStateIndex;
pub use node::StateNode;
pub use snapshot::{BoardSnapshot, EvaluationSnapshot};
pub use state_tree::StateTree;
pub use value::{Evaluation, WIN_VALUE};

#[cfg(test)]
mod tests;
