use super::*;

fn promotion_pos() -> Position {
    // Dark man one step from the far rank; a light man far away keeps the
    // game alive after the promotion.
    Position::from_diagram(
        "
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . w .
        . b . . . . . .
        . . . . . . . .
        ",
        Side::Dark,
    )
    .unwrap()
}

#[test]
fn test_startpos_setup() {
    let pos = Position::startpos();
    assert_eq!(pos.count_pieces(Side::Dark), 12);
    assert_eq!(pos.count_pieces(Side::Light), 12);
    assert_eq!(pos.side_to_move, Side::Dark);
    assert_eq!(pos.no_capture_clock, 0);
    assert_eq!(pos.chain, None);

    // Pieces only on playable squares, unique ids per side.
    let mut dark_ids = Vec::new();
    for square in 0..64u8 {
        if let Some(pc) = pos.piece_at(square) {
            assert!(is_playable(square));
            assert!(!pc.king);
            assert_eq!(pc.origin, square);
            if pc.side == Side::Dark {
                dark_ids.push(pc.id);
            }
        } else {
            assert!(pos.piece_at(square).is_none());
        }
    }
    dark_ids.sort_unstable();
    dark_ids.dedup();
    assert_eq!(dark_ids.len(), 12);
}

#[test]
fn test_promotion_sets_king_flag() {
    let mut pos = promotion_pos();
    pos.no_capture_clock = 5;

    let to = sq(7, 2).unwrap();
    let mv = Move::step(sq(6, 1).unwrap(), to);
    let next = pos.apply_checked(mv, true).unwrap();

    let crowned = next.piece_at(to).unwrap();
    assert!(crowned.king);
    assert_eq!(crowned.origin, sq(6, 1).unwrap());
    // Promotion resets the tracked clock, like a capture.
    assert_eq!(next.no_capture_clock, 0);
}

#[test]
fn test_king_flag_never_reverts() {
    let pos = promotion_pos();
    let mv = Move::step(sq(6, 1).unwrap(), sq(7, 2).unwrap());
    let mut pos = pos.apply(mv, true);

    // March the new king around for a few turns; it stays a king.
    let tour = [
        Move::step(sq(5, 6).unwrap(), sq(4, 5).unwrap()), // light
        Move::step(sq(7, 2).unwrap(), sq(6, 1).unwrap()), // dark king back
        Move::step(sq(4, 5).unwrap(), sq(3, 4).unwrap()), // light
        Move::step(sq(6, 1).unwrap(), sq(5, 0).unwrap()), // dark king on
    ];
    for mv in tour {
        pos = pos.apply_checked(mv, true).expect("scripted move is legal");
    }
    assert!(pos.piece_at(sq(5, 0).unwrap()).unwrap().king);
}

#[test]
fn test_clock_bookkeeping() {
    let pos = Position::startpos();
    let mv = legal_moves(&pos)[0];

    // Tracked quiet move increments the clock.
    let tracked = pos.apply(mv, true);
    assert_eq!(tracked.no_capture_clock, 1);

    // Untracked apply leaves it frozen.
    let untracked = pos.apply(mv, false);
    assert_eq!(untracked.no_capture_clock, 0);
}

#[test]
fn test_capture_resets_clock() {
    let mut pos = Position::from_diagram(
        "
        . . . . . . . .
        . . . . . . . .
        . b . . . . . .
        . . w . . . . .
        . . . . . . . .
        . . . . . . w .
        . . . . . . . .
        . . . . . . . .
        ",
        Side::Dark,
    )
    .unwrap();
    pos.no_capture_clock = 17;

    let jump = legal_moves(&pos)[0];
    assert!(jump.is_capture());
    let next = pos.apply(jump, true);
    assert_eq!(next.no_capture_clock, 0);
    assert_eq!(next.piece_at(sq(3, 2).unwrap()), None, "captured man removed");
}

#[test]
fn test_apply_checked_rejects_illegal_moves() {
    let pos = Position::startpos();
    let before = pos.clone();

    // Moving backward from the front rank is not legal.
    let mv = Move::step(sq(2, 1).unwrap(), sq(1, 0).unwrap());
    let err = pos.apply_checked(mv, true).unwrap_err();
    assert_eq!(err, RulesError::IllegalMove(mv));
    assert_eq!(pos, before, "rejection leaves the position untouched");
}

#[test]
fn test_elimination_terminal_and_utility() {
    let pos = Position::from_diagram(
        "
        . . . . . . . .
        . . . . . . . .
        . b . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        ",
        Side::Light,
    )
    .unwrap();

    assert!(pos.is_terminal());
    assert_eq!(pos.utility(Side::Dark), 1);
    assert_eq!(pos.utility(Side::Light), -1);
}

#[test]
fn test_stalemate_loses_for_stuck_side() {
    // Light man on a2 is boxed in by the dark king on b1: its only forward
    // square is occupied and it cannot jump (no landing square on the board).
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

    assert!(legal_moves(&pos).is_empty());
    assert!(pos.is_terminal());
    assert_eq!(pos.utility(Side::Light), -1);
    assert_eq!(pos.utility(Side::Dark), 1);
}

#[test]
fn test_clock_draw_is_terminal_with_zero_utility() {
    let mut pos = Position::startpos();
    pos.no_capture_clock = NO_CAPTURE_LIMIT;
    assert!(pos.is_terminal());
    assert_eq!(pos.utility(Side::Dark), 0);
    assert_eq!(pos.utility(Side::Light), 0);
}

#[test]
fn test_from_diagram_rejects_garbage() {
    assert!(matches!(
        Position::from_diagram("nonsense", Side::Dark),
        Err(DiagramError::BadDimensions { .. })
    ));

    let bad_char = "
        . . . . . . . q
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        ";
    assert!(matches!(
        Position::from_diagram(bad_char, Side::Dark),
        Err(DiagramError::BadChar('q'))
    ));

    // a1 (row 0, col 0) is a light-colored square and must stay empty.
    let unplayable = "
        b . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        ";
    assert!(matches!(
        Position::from_diagram(unplayable, Side::Dark),
        Err(DiagramError::UnplayableSquare { row: 0, col: 0 })
    ));
}

#[test]
fn test_display_round_trips_through_diagram() {
    let pos = Position::startpos();
    let rendered = pos.to_string();
    let reparsed = Position::from_diagram(&rendered, Side::Dark).unwrap();
    assert_eq!(rendered, reparsed.to_string());
    assert_eq!(pos.position_hash(), reparsed.position_hash());
}
