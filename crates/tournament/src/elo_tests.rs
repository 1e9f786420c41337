use super::*;

#[test]
fn test_equal_ratings_expect_even_score() {
    let mut tracker = EloTracker::new();

    let expected = tracker.expected_score("engine1", "engine2");
    assert!((expected - 0.5).abs() < 0.001);
}

#[test]
fn test_sweep_moves_ratings_apart() {
    let mut tracker = EloTracker::new();

    // Engine1 wins all games
    let result = MatchResult {
        wins: 10,
        losses: 0,
        draws: 0,
    };
    tracker.update_ratings("engine1", "engine2", &result);

    assert!(tracker.get_rating("engine1") > DEFAULT_ELO);
    assert!(tracker.get_rating("engine2") < DEFAULT_ELO);
    assert_eq!(tracker.games_played["engine1"], 10);
    assert_eq!(tracker.history.len(), 1);
}

#[test]
fn test_all_draws_keep_equal_ratings_equal() {
    let mut tracker = EloTracker::new();
    let result = MatchResult {
        wins: 0,
        losses: 0,
        draws: 8,
    };
    tracker.update_ratings("a", "b", &result);
    assert!((tracker.get_rating("a") - tracker.get_rating("b")).abs() < 1e-9);
}

#[test]
fn test_game_result_flipping() {
    assert_eq!(GameResult::Win.flipped(), GameResult::Loss);
    assert_eq!(GameResult::Loss.flipped(), GameResult::Win);
    assert_eq!(GameResult::Draw.flipped(), GameResult::Draw);
}

#[test]
fn test_leaderboard_is_sorted_by_rating() {
    let mut tracker = EloTracker::new();
    let sweep = MatchResult {
        wins: 4,
        losses: 0,
        draws: 0,
    };
    tracker.update_ratings("strong", "weak", &sweep);

    let board = tracker.leaderboard();
    assert_eq!(board[0].0, "strong");
    assert_eq!(board[1].0, "weak");
}

#[test]
fn test_tracker_round_trips_through_json() {
    let mut tracker = EloTracker::new();
    tracker.update_ratings(
        "a",
        "b",
        &MatchResult {
            wins: 1,
            losses: 2,
            draws: 3,
        },
    );

    let dir = std::env::temp_dir().join("draughts_tournament_elo_test.json");
    tracker.save(&dir).unwrap();
    let loaded = EloTracker::load(&dir).unwrap();
    assert_eq!(loaded.ratings.len(), 2);
    assert_eq!(loaded.history.len(), 1);
    let _ = std::fs::remove_file(&dir);
}
