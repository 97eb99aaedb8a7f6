mod board;
mod coords;
pub mod error;
mod state;

pub use board::{Board, Outcome, Side};
pub use coords::Coords;
pub use error::GameError;
pub use state::GameState;

#[cfg(test)]
mod tests;
