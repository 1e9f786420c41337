//! Monte Carlo tree search engine.
//!
//! UCT with random playouts: each iteration walks the tree by UCB1, expands
//! one untried move, plays a random rollout from there and backs the outcome
//! up the path. Rollouts are cut off after a fixed number of plies and
//! scored with the heuristic evaluation instead of running to the end.
//!
//! Backpropagation is perspective-aware: each node stores value from the
//! viewpoint of the side that moved into it, which in draughts is not simply
//! alternating by depth because a multi-jump keeps the mover on turn.

mod search;

use draughts_core::{Engine, Position, SearchLimits, SearchResult, TimeControl};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const DEFAULT_ITERATIONS: u32 = 200;
pub const DEFAULT_ROLLOUT_DEPTH: u32 = 20;
pub const DEFAULT_EXPLORATION: f32 = 1.4;

/// MCTS move chooser. Budgeted by iterations rather than depth; the reported
/// depth is 0 and the move-time limit, when set, is honored between
/// iterations.
#[derive(Debug, Clone)]
pub struct MctsEngine {
    pub iterations: u32,
    pub rollout_depth: u32,
    pub exploration: f32,
    rng: StdRng,
}

impl MctsEngine {
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    /// Fixed-seed construction, for reproducible games and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            rollout_depth: DEFAULT_ROLLOUT_DEPTH,
            exploration: DEFAULT_EXPLORATION,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn with_iterations(iterations: u32) -> Self {
        let mut engine = Self::new();
        engine.iterations = iterations;
        engine
    }
}

impl Default for MctsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MctsEngine {
    fn choose_move(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult {
        let tc = TimeControl::start(&limits);
        let outcome = search::mcts_search(
            pos,
            self.iterations,
            self.rollout_depth,
            self.exploration,
            &mut self.rng,
            &tc,
        );

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth: 0,
            nodes: outcome.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "MCTS v1.0"
    }

    fn new_game(&mut self) {}
}
