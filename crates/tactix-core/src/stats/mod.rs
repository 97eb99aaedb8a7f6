mod complete;
mod interpret;
mod source;
mod statistics;

pub use complete::CompleteStatistics;
pub use interpret::{NotLoseRatio, StatsInterpreter, WinRatio};
pub use source::StatsSource;
pub use statistics::Statistics;
