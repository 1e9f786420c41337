//! Match runner for playing full games between engines.
//!
//! Games are driven through `Session`, so the no-capture limit and threefold
//! repetition are scored exactly as in live play, not re-implemented here.

use std::time::Duration;

use draughts_core::{Engine, GameStatus, SearchLimits, Session, Side};
use rand::seq::SliceRandom;
use rand::thread_rng;
use rand::Rng;
use tracing::{info, warn};

use crate::elo::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for depth-limited engines
    pub depth: u8,
    /// Maximum time per move (None = no limit)
    pub time_per_move: Option<Duration>,
    /// Hard cap on plies per game; games still running are scored drawn
    pub max_plies: u32,
    /// Random plies played before the engines take over, to vary games
    /// between deterministic opponents
    pub opening_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Log per-game progress
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 4,
            time_per_move: None,
            max_plies: 300,
            opening_plies: 0,
            alternate_colors: true,
            verbose: true,
        }
    }
}

impl MatchConfig {
    fn search_limits(&self) -> SearchLimits {
        match self.time_per_move {
            Some(time) => SearchLimits::depth_and_time(self.depth, time),
            None => SearchLimits::depth(self.depth),
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines.
    ///
    /// Returns the result from engine1's perspective.
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();
        let mut rng = thread_rng();

        for game_num in 0..self.config.num_games {
            // Engine1 takes dark (moves first) on even games when alternating.
            let engine1_dark = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_dark {
                self.play_game(engine1, engine2, &mut rng)
            } else {
                self.play_game(engine2, engine1, &mut rng).flipped()
            };

            match game_result {
                GameResult::Win => result.wins += 1,
                GameResult::Loss => result.losses += 1,
                GameResult::Draw => result.draws += 1,
            }

            if self.config.verbose {
                info!(
                    game = game_num + 1,
                    of = self.config.num_games,
                    outcome = %game_result.as_score_str(),
                    color = if engine1_dark { "dark" } else { "light" },
                    score = format!("{}-{}-{}", result.wins, result.losses, result.draws),
                    "game finished"
                );
            }
        }

        result
    }

    /// Play a single game; the result is from dark's perspective.
    fn play_game(
        &self,
        dark: &mut dyn Engine,
        light: &mut dyn Engine,
        rng: &mut impl Rng,
    ) -> GameResult {
        let mut session = Session::new();
        dark.new_game();
        light.new_game();

        // Random opening plies diversify games between deterministic engines.
        for _ in 0..self.config.opening_plies {
            if session.status().is_over() {
                break;
            }
            let moves = session.legal_moves();
            if let Some(&mv) = moves.choose(rng) {
                let _ = session.play(mv);
            }
        }

        while !session.status().is_over() && (session.history().len() as u32) < self.config.max_plies
        {
            let limits = self.config.search_limits();
            let side = session.position().side_to_move;
            let outcome = match side {
                Side::Dark => dark.choose_move(session.position(), limits),
                Side::Light => light.choose_move(session.position(), limits),
            };

            // A stopped search may return no move; play any legal one rather
            // than forfeiting the game on a clock artifact.
            let mv = match outcome.best_move.or_else(|| session.legal_moves().first().copied()) {
                Some(mv) => mv,
                None => break,
            };

            if let Err(err) = session.play(mv) {
                let name = match side {
                    Side::Dark => dark.name(),
                    Side::Light => light.name(),
                };
                warn!(engine = name, %mv, %err, "engine produced an unplayable move, forfeiting");
                return match side {
                    Side::Dark => GameResult::Loss,
                    Side::Light => GameResult::Win,
                };
            }
        }

        match session.status() {
            GameStatus::Won { winner: Side::Dark, .. } => GameResult::Win,
            GameStatus::Won { winner: Side::Light, .. } => GameResult::Loss,
            GameStatus::Drawn(_) | GameStatus::InProgress => GameResult::Draw,
        }
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
