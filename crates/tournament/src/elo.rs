//! Elo rating calculation and tracking

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Default starting Elo for new engines
pub const DEFAULT_ELO: f64 = 1500.0;

/// K-factor for Elo updates (higher = more volatile)
pub const K_FACTOR: f64 = 32.0;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("failed to read or write tracker file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tracker file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of a single game, from the first player's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the other player.
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }

    pub fn as_score_str(self) -> &'static str {
        match self {
            GameResult::Win => "1-0",
            GameResult::Loss => "0-1",
            GameResult::Draw => "1/2",
        }
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self {
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Record of a single match result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
    pub timestamp: String,
    pub elo_change: f64,
}

/// Elo rating system for tracking engine strength
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EloTracker {
    /// Ratings for each engine (by spec string, e.g. "mcts:800")
    pub ratings: HashMap<String, f64>,
    /// Number of games played by each engine
    pub games_played: HashMap<String, u32>,
    /// Match history for analysis
    pub history: Vec<MatchRecord>,
}

impl EloTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load tracker from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TrackerError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save tracker to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TrackerError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Get or initialize rating for an engine
    pub fn get_rating(&mut self, engine: &str) -> f64 {
        *self.ratings.entry(engine.to_string()).or_insert(DEFAULT_ELO)
    }

    /// Calculate expected score for engine1 against engine2
    pub fn expected_score(&mut self, engine1: &str, engine2: &str) -> f64 {
        let r1 = self.get_rating(engine1);
        let r2 = self.get_rating(engine2);
        1.0 / (1.0 + 10.0_f64.powf((r2 - r1) / 400.0))
    }

    /// Update ratings after a match
    pub fn update_ratings(&mut self, engine1: &str, engine2: &str, result: &MatchResult) {
        let expected = self.expected_score(engine1, engine2);
        let actual = result.score();

        let games = result.total_games() as f64;
        let elo_change = K_FACTOR * games * (actual - expected);

        let r1 = self.get_rating(engine1);
        let r2 = self.get_rating(engine2);
        self.ratings.insert(engine1.to_string(), r1 + elo_change);
        self.ratings.insert(engine2.to_string(), r2 - elo_change);

        *self.games_played.entry(engine1.to_string()).or_insert(0) += result.total_games();
        *self.games_played.entry(engine2.to_string()).or_insert(0) += result.total_games();

        self.history.push(MatchRecord {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result: result.clone(),
            timestamp: unix_timestamp(),
            elo_change,
        });
    }

    /// Get a sorted leaderboard
    pub fn leaderboard(&self) -> Vec<(String, f64, u32)> {
        let mut entries: Vec<_> = self
            .ratings
            .iter()
            .map(|(name, &rating)| {
                let games = self.games_played.get(name).copied().unwrap_or(0);
                (name.clone(), rating, games)
            })
            .collect();
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        entries
    }

    /// Print leaderboard to stdout
    pub fn print_leaderboard(&self) {
        println!("\n=== Engine Leaderboard ===");
        println!("{:<30} {:>8} {:>8}", "Engine", "Elo", "Games");
        println!("{}", "-".repeat(50));
        for (name, rating, games) in self.leaderboard() {
            println!("{:<30} {:>8.1} {:>8}", name, rating, games);
        }
        println!();
    }
}

/// Seconds since the epoch; avoids pulling in a date crate for a log field.
fn unix_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}", duration.as_secs())
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
