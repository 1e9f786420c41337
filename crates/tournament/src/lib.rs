//! Tournament runner for draughts engines.
//!
//! This crate provides infrastructure for:
//! - Running matches between different move choosers
//! - Tracking Elo ratings across engine configurations
//! - Persisting results for later comparison
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the alpha-beta and MCTS engines
//! cargo run -p tournament -- match alphabeta mcts --games 20 --depth 4
//!
//! # Run a gauntlet (one engine vs the built-in field)
//! cargo run -p tournament -- gauntlet mcts:800 --games 10
//! ```

mod elo;
mod match_runner;
mod results;

pub use elo::*;
pub use match_runner::*;
pub use results::*;
