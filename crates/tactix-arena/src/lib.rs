mod config;
mod contest;
mod error;
mod player;
pub mod players;
mod selector;

pub use config::{ArenaConfig, ConfigError};
pub use contest::{Game, Match, MatchScore};
pub use error::ArenaError;
pub use player::{Player, TrackedGame};
pub use selector::{EqualMoveSelector, FirstMoveSelector, RandomMoveSelector};
