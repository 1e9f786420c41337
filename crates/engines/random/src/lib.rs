//! Random move draughts engine.
//!
//! Picks uniformly from the legal moves. Useful for:
//! - Testing infrastructure before wiring in real engines
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation over full games

use draughts_core::{legal_moves, Engine, Position, SearchLimits, SearchResult};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// A draughts engine that plays random legal moves. Mandatory captures are
/// still respected because it only ever draws from `legal_moves`.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomEngine {
    fn choose_move(&mut self, pos: &Position, _limits: SearchLimits) -> SearchResult {
        let moves = legal_moves(pos);
        self.nodes = 1;

        let best_move = moves.choose(&mut thread_rng()).copied();

        SearchResult {
            best_move,
            score: 0.0,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
