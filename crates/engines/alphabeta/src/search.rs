//! Max/min search with alpha-beta pruning.
//!
//! The mover is read from the position, not derived from the ply count:
//! after a capture with a continuation the same side moves again, so
//! consecutive plies are not guaranteed to alternate. A node maximizes when
//! the side to move is the root side and minimizes otherwise.
//!
//! All speculative moves are applied with draw tracking enabled onto private
//! clones. The live game never sees them, and the 40-ply no-capture limit
//! keeps even the exhaustive search finite.

use std::collections::HashMap;

use draughts_core::{evaluate, legal_moves, Move, Position, Side, TimeControl};

/// Result from `pick_best_move` indicating whether the search completed.
pub struct SearchOutcome {
    /// Best move with its score in [-1, 1] from the mover's perspective.
    pub best_move: Option<(Move, f32)>,
    /// True if the search was cut short by the time limit.
    pub stopped: bool,
}

/// Searches the position to `depth` plies and returns the best move.
///
/// Speculative applies run with draw tracking enabled on private clones so
/// quiet lines hit the 40-ply terminal instead of recursing past it. The
/// caller's position and session state are never modified.
pub fn pick_best_move(
    pos: &Position,
    depth: u8,
    nodes: &mut u64,
    tc: &TimeControl,
) -> SearchOutcome {
    let moves = legal_moves(pos);
    if moves.is_empty() {
        return SearchOutcome {
            best_move: None,
            stopped: false,
        };
    }

    let root_side = pos.side_to_move;
    let mut best = moves[0];
    let mut best_score = f32::NEG_INFINITY;
    let mut alpha = f32::NEG_INFINITY;
    let mut stopped = false;

    for mv in moves {
        if tc.expired() {
            stopped = true;
            break;
        }

        let next = pos.apply(mv, true);
        *nodes += 1;

        let (score, was_stopped) = minimax(
            &next,
            root_side,
            depth.saturating_sub(1),
            alpha,
            f32::INFINITY,
            nodes,
            tc,
        );

        if was_stopped {
            stopped = true;
            break;
        }

        if score > best_score {
            best_score = score;
            best = mv;
        }
        if best_score > alpha {
            alpha = best_score;
        }
    }

    if best_score == f32::NEG_INFINITY {
        // Timed out before the first root move finished.
        return SearchOutcome {
            best_move: None,
            stopped,
        };
    }
    SearchOutcome {
        best_move: Some((best, best_score)),
        stopped,
    }
}

/// Recursive alpha-beta. Scores are always from `root_side`'s perspective.
///
/// Returns (score, stopped).
fn minimax(
    pos: &Position,
    root_side: Side,
    depth: u8,
    mut alpha: f32,
    mut beta: f32,
    nodes: &mut u64,
    tc: &TimeControl,
) -> (f32, bool) {
    if tc.poll(*nodes) {
        return (0.0, true);
    }

    if pos.is_terminal() {
        return (pos.utility(root_side) as f32, false);
    }
    if depth == 0 {
        return (evaluate(pos, root_side), false);
    }

    let maximizing = pos.side_to_move == root_side;
    let mut best = if maximizing {
        f32::NEG_INFINITY
    } else {
        f32::INFINITY
    };

    for mv in legal_moves(pos) {
        let next = pos.apply(mv, true);
        *nodes += 1;

        let (score, stopped) = minimax(&next, root_side, depth - 1, alpha, beta, nodes, tc);
        if stopped {
            return (best, true);
        }

        if maximizing {
            if score > best {
                best = score;
            }
            if best > alpha {
                alpha = best;
            }
        } else {
            if score < best {
                best = score;
            }
            if best < beta {
                beta = best;
            }
        }
        if alpha >= beta {
            break; // cutoff
        }
    }

    (best, false)
}

/// Full-depth minimax over the whole game tree, memoized on the canonical
/// position hash. Returns the best move and its exact game value in
/// {-1, 0, +1} from the mover's perspective (modulo the table approximations
/// described on `ExhaustiveEngine`).
///
/// Values are cached from Dark's perspective so the table survives across
/// moves by either side.
pub(crate) fn solve(
    pos: &Position,
    table: &mut HashMap<u64, f32>,
    nodes: &mut u64,
) -> (Option<Move>, f32) {
    let moves = legal_moves(pos);
    if moves.is_empty() {
        return (None, 0.0);
    }

    let maximizing = pos.side_to_move == Side::Dark;
    let mut best = moves[0];
    let mut best_dark = if maximizing {
        f32::NEG_INFINITY
    } else {
        f32::INFINITY
    };

    for mv in moves {
        let next = pos.apply(mv, true);
        *nodes += 1;
        let dark_score = solve_value(&next, f32::NEG_INFINITY, f32::INFINITY, table, nodes);
        let better = if maximizing {
            dark_score > best_dark
        } else {
            dark_score < best_dark
        };
        if better {
            best_dark = dark_score;
            best = mv;
        }
    }

    let score = if pos.side_to_move == Side::Dark {
        best_dark
    } else {
        -best_dark
    };
    (Some(best), score)
}

/// Game value for Dark of a position, searched to the end of the tree.
///
/// Recursion is bounded without a depth argument: captures shrink the
/// material and the tracked no-capture clock terminates every quiet line
/// at 40 plies.
fn solve_value(
    pos: &Position,
    mut alpha: f32,
    mut beta: f32,
    table: &mut HashMap<u64, f32>,
    nodes: &mut u64,
) -> f32 {
    if pos.is_terminal() {
        return pos.utility(Side::Dark) as f32;
    }

    let key = pos.position_hash();
    if let Some(&cached) = table.get(&key) {
        return cached;
    }

    let maximizing = pos.side_to_move == Side::Dark;
    let mut best = if maximizing {
        f32::NEG_INFINITY
    } else {
        f32::INFINITY
    };

    for mv in legal_moves(pos) {
        let next = pos.apply(mv, true);
        *nodes += 1;
        let score = solve_value(&next, alpha, beta, table, nodes);

        if maximizing {
            if score > best {
                best = score;
            }
            if best > alpha {
                alpha = best;
            }
        } else {
            if score < best {
                best = score;
            }
            if best < beta {
                beta = best;
            }
        }
        if alpha >= beta {
            break;
        }
    }

    table.insert(key, best);
    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
