//! Persistence contract of the score record

use tictacbot::{
    adapters::JsonStatsRepository, board::MatchOutcome, board::Player, ports::StatsRepository,
    SessionStats,
};

#[test]
fn test_file_roundtrip_is_identical() {
    let dir = tempfile::TempDir::new().expect("failed to create temp dir");
    let path = dir.path().join("game_stats.json");
    let repo = JsonStatsRepository::new();

    let stats = SessionStats {
        wins: 2,
        losses: 1,
        draws: 0,
        moves_played: 5,
    };
    repo.save(&stats, &path).expect("save should succeed");

    let loaded = repo.load(&path).expect("load should succeed");
    assert_eq!(loaded, stats);
}

#[test]
fn test_record_missing_draws_defaults_to_zero() {
    let dir = tempfile::TempDir::new().expect("failed to create temp dir");
    let path = dir.path().join("game_stats.json");
    std::fs::write(
        &path,
        r#"{
    "wins": 2,
    "losses": 1,
    "moves_played": 5
}"#,
    )
    .unwrap();

    let loaded = JsonStatsRepository::new().load(&path).unwrap();
    assert_eq!(loaded.wins, 2);
    assert_eq!(loaded.losses, 1);
    assert_eq!(loaded.draws, 0);
    assert_eq!(loaded.moves_played, 5);
}

#[test]
fn test_fresh_install_counts_from_zero() {
    let dir = tempfile::TempDir::new().expect("failed to create temp dir");
    let loaded = JsonStatsRepository::new()
        .load(&dir.path().join("never_written.json"))
        .unwrap();
    assert_eq!(loaded, SessionStats::default());
}

#[test]
fn test_every_mutation_roundtrips() {
    let dir = tempfile::TempDir::new().expect("failed to create temp dir");
    let path = dir.path().join("game_stats.json");
    let repo = JsonStatsRepository::new();

    let mut stats = SessionStats::default();
    for outcome in [
        MatchOutcome::Win(Player::Bot),
        MatchOutcome::Draw,
        MatchOutcome::Win(Player::Human),
    ] {
        stats.record_move();
        stats.record_outcome(outcome);
        repo.save(&stats, &path).expect("save should succeed");
        assert_eq!(repo.load(&path).unwrap(), stats);
    }

    assert_eq!(stats.games_played(), 3);
    assert_eq!(stats.moves_played, 3);
}
