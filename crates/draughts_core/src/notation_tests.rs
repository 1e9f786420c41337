use super::*;
use crate::types::{sq, Move, Side};

#[test]
fn test_parse_square() {
    assert_eq!(parse_square("a1"), Ok(0));
    assert_eq!(parse_square("h8"), Ok(63));
    assert_eq!(parse_square("b3"), Ok(sq(2, 1).unwrap()));
    assert!(parse_square("i1").is_err());
    assert!(parse_square("a9").is_err());
    assert!(parse_square("a").is_err());
    assert!(parse_square("a1b").is_err());
}

#[test]
fn test_parse_move_grammar() {
    assert_eq!(
        parse_move("b3-a4"),
        Ok((sq(2, 1).unwrap(), sq(3, 0).unwrap(), false))
    );
    assert_eq!(
        parse_move("b3xd5"),
        Ok((sq(2, 1).unwrap(), sq(4, 3).unwrap(), true))
    );

    for bad in ["", "b3", "b3 a4", "b3_a4", "b3-a", "b3-a44", "3b-a4", "zz-a4"] {
        assert!(parse_move(bad).is_err(), "{bad:?} should be rejected");
    }
}

#[test]
fn test_resolve_against_legal_moves() {
    let pos = Position::startpos();

    let mv = resolve_move(&pos, "b3-a4").unwrap();
    assert_eq!(mv, Move::step(sq(2, 1).unwrap(), sq(3, 0).unwrap()));

    // Well-formed but not legal here: the man on b3 cannot reach e4.
    assert!(matches!(
        resolve_move(&pos, "b3-e4"),
        Err(NotationError::NotLegal(_))
    ));

    // The separator must match the move kind.
    assert!(matches!(
        resolve_move(&pos, "b3xa4"),
        Err(NotationError::WrongSeparator(_))
    ));
}

#[test]
fn test_move_display_round_trips() {
    let pos = Position::startpos();
    for mv in legal_moves(&pos) {
        let txt = mv.to_string();
        assert_eq!(resolve_move(&pos, &txt).unwrap(), mv);
    }
}

#[test]
fn test_malformed_text_never_reaches_the_engine() {
    // Out-of-range coordinates are caught at the grammar level.
    let pos = Position::from_diagram(
        "
        . . . . . . . .
        . . . . . . . .
        . b . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . w . . . . . .
        . . . . . . . .
        ",
        Side::Dark,
    )
    .unwrap();
    assert!(resolve_move(&pos, "b3-i9").is_err());
    assert!(resolve_move(&pos, "b0-a1").is_err());
}
