use crate::{board::Position, movegen::legal_moves};

/// Pure perft node count: the number of leg-wise move sequences of length
/// `depth` from this position. Each jump of a multi-jump counts as its own
/// leg, so totals match move-wise references only while no multi-jumps occur.
///
/// Used as a regression audit on the move generator. Applies moves without
/// draw tracking, so the count is independent of the no-capture clock.
pub fn perft(pos: &Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0u64;
    for mv in legal_moves(pos) {
        let next = pos.apply(mv, false);
        nodes += perft(&next, depth - 1);
    }
    nodes
}
