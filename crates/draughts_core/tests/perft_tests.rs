use std::time::Instant;

use rayon::prelude::*;

use draughts_core::{perft, Position, Side};

// Counts are leg-wise: every jump of a multi-jump is its own node. From the
// standard setup no jump is even possible until depth 5, so these depths
// match move-wise references exactly.
const STARTPOS_COUNTS: &[(u8, u64)] = &[(1, 7), (2, 49), (3, 302), (4, 1469)];

// Two lone kings far enough apart that no capture can occur within three
// plies. Counted by hand: 4 king moves, 4 replies, then the dark king has
// 2 moves from each corner square and 4 from each interior square.
const TWO_KINGS: &str = "
    . . . . . . . .
    . . B . . . . .
    . . . . . . . .
    . . . . . . . .
    . . . . . . . .
    . . . . . . . .
    . . . . . W . .
    . . . . . . . .
";
const TWO_KINGS_COUNTS: &[(u8, u64)] = &[(1, 4), (2, 16), (3, 48)];

#[test]
fn perft_from_standard_setup() {
    STARTPOS_COUNTS.par_iter().for_each(|&(depth, expected)| {
        let pos = Position::startpos();
        let start = Instant::now();
        let got = perft(&pos, depth);
        assert_eq!(
            got, expected,
            "perft mismatch at depth {depth}: expected {expected}, got {got}"
        );
        println!(
            "startpos depth {depth}: {got} nodes in {:.3?}",
            start.elapsed()
        );
    });
}

#[test]
fn perft_two_kings_endgame() {
    let pos = Position::from_diagram(TWO_KINGS, Side::Dark).unwrap();
    for &(depth, expected) in TWO_KINGS_COUNTS {
        assert_eq!(perft(&pos, depth), expected, "depth {depth}");
    }
}

#[test]
fn perft_counts_every_jump_leg() {
    // Dark to move must jump; the single jump is the only node at depth 1.
    let pos = Position::from_diagram(
        "
        . . . . . . . .
        . . . . . . . .
        . b . . . . . .
        . . w . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        ",
        Side::Dark,
    )
    .unwrap();
    assert_eq!(perft(&pos, 1), 1);
    // After the jump light has no pieces, so the tree ends there.
    assert_eq!(perft(&pos, 2), 0);
}
