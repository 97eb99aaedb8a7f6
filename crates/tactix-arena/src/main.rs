use std::env;
use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use tactix_arena::{
    ArenaConfig, FirstMoveSelector, Match, MatchScore, Player, RandomMoveSelector,
    players::{MinimaxPlayer, RandomPlayer, SequentialPlayer, StatisticalPlayer},
};
use tactix_core::{
    CompleteStatistics, NotLoseRatio, StateTree, UniqueStateIndex, WinRatio, diagnose,
};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match env::args().nth(1) {
        Some(path) => ArenaConfig::from_yaml_path(path)?,
        None => ArenaConfig::from_default_yaml()?,
    };
    info!(rounds = config.rounds, seed = config.seed, "arena configured");

    run_diagnostics()?;
    run_card(&config)?;
    Ok(())
}

/// Cross-check the minimax evaluations against the self-play statistics
/// before letting anyone play with them.
fn run_diagnostics() -> Result<(), Box<dyn Error>> {
    let tree = StateTree::evaluated()?;
    let index = UniqueStateIndex::build(&tree)?;
    let stats = CompleteStatistics::generate()?;
    info!(
        nodes = tree.node_count(),
        boards = index.len(),
        "state tree evaluated"
    );

    let reports = [
        ("win-ratio", diagnose(&tree, &index, &stats, &WinRatio)?),
        ("not-lose-ratio", diagnose(&tree, &index, &stats, &NotLoseRatio)?),
    ];
    for (policy, report) in reports {
        info!(
            policy,
            warnings = report.warning_count(),
            with_samples = report.with_samples_count(),
            "diagnostic finished"
        );
    }
    Ok(())
}

fn run_card(config: &ArenaConfig) -> Result<(), Box<dyn Error>> {
    let contest = Match::new(config.rounds);

    let mut sequential = SequentialPlayer::new("sequential");
    let mut random = RandomPlayer::new("random", config.seed);
    let score = contest.run(&mut sequential, &mut random)?;
    report(&sequential, &random, score);

    let mut minimax = MinimaxPlayer::new("minimax")?;
    let mut random = RandomPlayer::new("random", config.seed);
    let score = contest.run(&mut minimax, &mut random)?;
    report(&minimax, &random, score);

    let stats = CompleteStatistics::generate()?;
    let mut greedy =
        StatisticalPlayer::new("win-ratio", stats.clone(), WinRatio, FirstMoveSelector);
    let mut cautious = StatisticalPlayer::new(
        "not-lose-ratio",
        stats,
        NotLoseRatio,
        RandomMoveSelector::new(config.seed),
    );
    let score = contest.run(&mut greedy, &mut cautious)?;
    report(&greedy, &cautious, score);

    Ok(())
}

fn report(player1: &dyn Player, player2: &dyn Player, score: MatchScore) {
    info!(
        player1 = player1.name(),
        score1 = score.player1,
        player2 = player2.name(),
        score2 = score.player2,
        "match result"
    );
}
