pub mod board;
pub mod eval;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod session;
pub mod time_control;
pub mod types;
pub mod zobrist;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use eval::evaluate;
pub use movegen::*;
pub use notation::{parse_move, parse_square, resolve_move, NotationError};
pub use perft::perft;
pub use session::*;
pub use time_control::*;
pub use types::*;
pub use zobrist::ZOBRIST;

// =============================================================================
// Engine trait — implemented by all move choosers (alpha-beta, MCTS, random)
// =============================================================================

/// Result of a move-selection call
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen move, always an element of `legal_moves` (None if there
    /// are no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation in [-1, 1] from the mover's perspective
    pub score: f32,
    /// Search depth reached (plies; iteration-budgeted engines report 0)
    pub depth: u8,
    /// Number of nodes explored
    pub nodes: u64,
    /// Whether the search was cut short by the time limit
    pub stopped: bool,
}

/// A move chooser. Implementations range from uniform-random to full-depth
/// alpha-beta; callers supply them interchangeably wherever a move is needed.
///
/// `choose_move` receives the position by reference but must treat it as a
/// value: all exploration happens on private copies, and the live game's draw
/// state is never touched (engines apply moves with tracking disabled, or
/// tracked onto their own clones).
pub trait Engine: Send {
    /// Pick a move for the side to move, within the given limits.
    fn choose_move(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult;

    /// The engine's display name.
    fn name(&self) -> &str;

    /// Reset internal state for a new game (clear caches, trees, counters).
    fn new_game(&mut self) {}
}
