//! Minimax draughts engines.
//!
//! Two move choosers share one search core:
//! - [`AlphaBetaEngine`]: depth-limited alpha-beta with the heuristic
//!   evaluation at the leaves. The baseline "strong" engine.
//! - [`ExhaustiveEngine`]: searches to the end of the game tree with a
//!   transposition table, only practical in sparse endgames.
//!
//! Neither is a negamax: a multi-jump keeps the same side on the move across
//! consecutive plies, so the search is an explicit max/min keyed on whose
//! turn it is rather than on ply parity.

mod search;

use std::collections::HashMap;

use draughts_core::{Engine, Position, SearchLimits, SearchResult, TimeControl};

/// Depth-limited alpha-beta engine.
///
/// Honors both parts of [`SearchLimits`]: the depth bound and, when set, the
/// move-time budget. On timeout it returns the best move completed so far
/// and flags the result as stopped.
#[derive(Debug, Clone, Default)]
pub struct AlphaBetaEngine {
    nodes: u64,
}

impl AlphaBetaEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for AlphaBetaEngine {
    fn choose_move(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        let tc = TimeControl::start(&limits);
        let outcome = search::pick_best_move(pos, limits.depth, &mut self.nodes, &tc);

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0.0),
            depth: limits.depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "AlphaBeta v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

/// Full-depth minimax with a transposition table, for solving endgames.
///
/// The table is keyed on the canonical position hash alone, which ignores
/// the no-capture clock and carries no alpha/beta window bounds. Cached
/// values are therefore approximations twice over: a value computed near
/// the 40-ply limit is reused for the same placement with a fresh clock,
/// and a score produced under a narrow window may be a bound rather than
/// an exact value. In practice this trades exactness in rare clock-bound
/// lines for the table hits that make full-depth search feasible at all.
///
/// Search limits are ignored; the reported depth is 0 and the search always
/// runs to completion. Use it on positions with a handful of pieces.
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveEngine {
    table: HashMap<u64, f32>,
    nodes: u64,
}

impl ExhaustiveEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Engine for ExhaustiveEngine {
    fn choose_move(&mut self, pos: &Position, _limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        let (best_move, score) = search::solve(pos, &mut self.table, &mut self.nodes);

        SearchResult {
            best_move,
            score,
            depth: 0,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Exhaustive v1.0"
    }

    fn new_game(&mut self) {
        self.table.clear();
        self.nodes = 0;
    }
}

pub use search::pick_best_move;
