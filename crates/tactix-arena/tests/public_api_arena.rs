use tactix_arena::{
    ArenaConfig, ConfigError, FirstMoveSelector, Game, Match, MatchScore, Player,
    players::{MinimaxPlayer, RandomPlayer, SequentialPlayer, StatisticalPlayer},
};
use tactix_core::{CompleteStatistics, Outcome, Side, WinRatio};

#[test]
fn sequential_mirror_game_is_won_by_the_first_mover() {
    // Both players take the lowest free field, so X collects 1, 3, 5, 7
    // and completes the 3-5-7 diagonal on its fourth move.
    let mut first = SequentialPlayer::new("first");
    let mut second = SequentialPlayer::new("second");
    let outcome = Game::new(&mut first, &mut second).run().unwrap();
    assert_eq!(outcome, Outcome::Win(Side::X));
}

#[test]
fn mirror_match_splits_the_points_evenly() {
    // One round plays both side assignments; identical strategies win one
    // game each.
    let mut first = SequentialPlayer::new("first");
    let mut second = SequentialPlayer::new("second");
    let score = Match::new(1).run(&mut first, &mut second).unwrap();
    assert_eq!(score, MatchScore { player1: 2, player2: 2 });
}

#[test]
fn minimax_mirror_game_is_a_tie() {
    let mut first = MinimaxPlayer::new("first").unwrap();
    let mut second = MinimaxPlayer::new("second").unwrap();
    let outcome = Game::new(&mut first, &mut second).run().unwrap();
    assert_eq!(outcome, Outcome::Tie);
}

#[test]
fn minimax_never_trails_a_random_player() {
    let mut minimax = MinimaxPlayer::new("minimax").unwrap();
    let mut random = RandomPlayer::new("random", 42);
    let score = Match::new(3).run(&mut minimax, &mut random).unwrap();
    // A perfect player cannot lose a game, so it takes at least as many
    // points from every game as its opponent.
    assert!(score.player1 >= score.player2);
}

#[test]
fn statistical_player_completes_games_from_both_sides() {
    let stats = CompleteStatistics::generate().unwrap();
    let mut statistical =
        StatisticalPlayer::new("win-ratio", stats, WinRatio, FirstMoveSelector);
    let mut sequential = SequentialPlayer::new("sequential");
    let score = Match::new(1).run(&mut statistical, &mut sequential).unwrap();
    assert_eq!(score.player1 + score.player2, 4);
    assert_eq!(statistical.name(), "win-ratio");
}

#[test]
fn default_config_parses() {
    let config = ArenaConfig::from_default_yaml().unwrap();
    assert_eq!(config.rounds, 1000);
    assert_eq!(config.seed, 7);
}

#[test]
fn zero_rounds_is_rejected() {
    let err = ArenaConfig::from_yaml_str("rounds: 0\nseed: 1\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}
