use std::time::Duration;

use draughts_core::{legal_moves, sq, Engine, Move, Position, SearchLimits, Side};

use crate::MctsEngine;

#[test]
fn test_returns_a_legal_move_from_the_standard_setup() {
    let mut engine = MctsEngine::seeded(1);
    let pos = Position::startpos();

    let result = engine.choose_move(&pos, SearchLimits::default());
    let mv = result.best_move.unwrap();
    assert!(legal_moves(&pos).contains(&mv));
    assert!(result.nodes > 0);
    assert!(!result.stopped);
}

#[test]
fn test_converges_on_the_winning_move() {
    // Dark king to b1 traps the light man immediately; every rollout from
    // that child scores +1, so the visit counts pile onto it.
    let pos = Position::from_diagram(
        "
        . . . . . . . .
        w . B . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        ",
        Side::Dark,
    )
    .unwrap();
    let winning = Move::step(sq(1, 2).unwrap(), sq(0, 1).unwrap());

    let mut engine = MctsEngine::seeded(7);
    engine.iterations = 600;
    let result = engine.choose_move(&pos, SearchLimits::default());

    assert_eq!(result.best_move, Some(winning));
    assert!(result.score > 0.9, "winning line mean was {}", result.score);
}

#[test]
fn test_no_moves_means_no_choice() {
    let pos = Position::from_diagram(
        "
        . B . . . . . .
        w . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        ",
        Side::Light,
    )
    .unwrap();
    let mut engine = MctsEngine::seeded(3);
    let result = engine.choose_move(&pos, SearchLimits::default());
    assert!(result.best_move.is_none());
}

#[test]
fn test_same_seed_same_move() {
    let pos = Position::startpos();
    let mut a = MctsEngine::seeded(42);
    let mut b = MctsEngine::seeded(42);

    let first = a.choose_move(&pos, SearchLimits::default());
    let second = b.choose_move(&pos, SearchLimits::default());
    assert_eq!(first.best_move, second.best_move);
    assert_eq!(first.nodes, second.nodes);
}

#[test]
fn test_expired_clock_stops_before_the_first_iteration() {
    let pos = Position::startpos();
    let mut engine = MctsEngine::seeded(9);
    let limits = SearchLimits::depth_and_time(0, Duration::ZERO);

    let result = engine.choose_move(&pos, limits);
    assert!(result.stopped);
    assert!(result.best_move.is_none());
}
