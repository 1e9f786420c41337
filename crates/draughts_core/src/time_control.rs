//! Search limits and the move-time deadline.
//!
//! All search here is single-threaded and runs to completion, so the deadline
//! is a plain `Instant` checked from inside the search loops rather than a
//! cross-thread stop flag. Checking the clock on every node is wasteful;
//! `poll` only consults it every `CHECK_INTERVAL` nodes.

use std::time::{Duration, Instant};

const CHECK_INTERVAL: u64 = 1024;

/// Limits an engine must respect while choosing a move. The time limit takes
/// precedence over depth: when it expires, the engine returns the best move
/// found so far and flags the result as stopped.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    /// Maximum search depth in plies.
    pub depth: u8,
    /// Maximum wall-clock time for this move (None = unlimited).
    pub move_time: Option<Duration>,
}

impl SearchLimits {
    /// Depth-only limits, no clock.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
        }
    }

    /// Depth plus a wall-clock budget.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            move_time: Some(move_time),
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(6)
    }
}

/// A started clock for one move-selection call.
#[derive(Debug, Clone, Copy)]
pub struct TimeControl {
    deadline: Option<Instant>,
}

impl TimeControl {
    /// Start the clock for this search.
    pub fn start(limits: &SearchLimits) -> Self {
        Self {
            deadline: limits.move_time.map(|t| Instant::now() + t),
        }
    }

    /// Unlimited clock, for searches that should run to completion.
    pub fn unlimited() -> Self {
        Self { deadline: None }
    }

    /// True once the deadline has passed.
    pub fn expired(&self) -> bool {
        match self.deadline {
            Some(deadline) => Instant::now() >= deadline,
            None => false,
        }
    }

    /// Cheap periodic check: consults the clock only every
    /// `CHECK_INTERVAL` nodes.
    pub fn poll(&self, nodes: u64) -> bool {
        self.deadline.is_some() && nodes % CHECK_INTERVAL == 0 && self.expired()
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
