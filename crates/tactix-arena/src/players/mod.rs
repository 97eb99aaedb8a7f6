mod minimax;
mod random;
mod sequential;
mod statistical;

pub use minimax::MinimaxPlayer;
pub use random::RandomPlayer;
pub use sequential::SequentialPlayer;
pub use statistical::StatisticalPlayer;
