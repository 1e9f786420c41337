//! The live game: one `Session` owns the current position, the repetition
//! history, and the move log for a whole game.
//!
//! Engines only ever see `&Position` values; `Session::play` is the single
//! commit path that applies a move with draw tracking enabled and updates the
//! repetition map. Speculative search can therefore never disturb the live
//! draw state.

use std::collections::HashMap;

use crate::board::{Position, RulesError, NO_CAPTURE_LIMIT, REPETITION_LIMIT};
use crate::movegen::legal_moves;
use crate::types::{Move, Side};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinReason {
    /// The loser has no pieces left.
    Elimination,
    /// The loser has pieces but no legal moves.
    NoMoves,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawReason {
    /// 40 plies without a capture or promotion.
    NoCaptureLimit,
    /// The same canonical position occurred three times.
    ThreefoldRepetition,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { winner: Side, reason: WinReason },
    Drawn(DrawReason),
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A full game from setup to its terminal status.
pub struct Session {
    position: Position,
    initial: Position,
    repetitions: HashMap<u64, u32>,
    history: Vec<Move>,
    status: GameStatus,
}

impl Session {
    /// Start a game from the standard setup.
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    /// Start a game from an arbitrary position (endgame studies, tests).
    pub fn from_position(position: Position) -> Self {
        let mut repetitions = HashMap::new();
        repetitions.insert(position.position_hash(), 1);
        let status = initial_status(&position);
        Self {
            initial: position.clone(),
            position,
            repetitions,
            history: Vec::new(),
            status,
        }
    }

    /// Forget the whole game and return to the starting position. The
    /// repetition map is cleared, so repeated games do not accumulate state.
    pub fn reset(&mut self) {
        let initial = self.initial.clone();
        *self = Self::from_position(initial);
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.position)
    }

    /// How often the given position has occurred in this game.
    pub fn times_seen(&self, pos: &Position) -> u32 {
        self.repetitions
            .get(&pos.position_hash())
            .copied()
            .unwrap_or(0)
    }

    /// Commit one move to the live game. The move must be legal; an illegal
    /// move is rejected with the session unchanged so the caller can retry.
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, RulesError> {
        if self.status.is_over() {
            return Err(RulesError::GameOver);
        }
        let next = self.position.apply_checked(mv, true)?;
        let seen = {
            let count = self.repetitions.entry(next.position_hash()).or_insert(0);
            *count += 1;
            *count
        };
        self.position = next;
        self.history.push(mv);
        self.status = self.resolve_status(seen);
        Ok(self.status)
    }

    /// Game value for `side` in {-1, 0, +1}; 0 while the game runs.
    pub fn utility(&self, side: Side) -> i32 {
        match self.status {
            GameStatus::InProgress | GameStatus::Drawn(_) => 0,
            GameStatus::Won { winner, .. } => {
                if winner == side {
                    1
                } else {
                    -1
                }
            }
        }
    }

    fn resolve_status(&self, seen: u32) -> GameStatus {
        let pos = &self.position;
        if pos.count_pieces(Side::Light) == 0 {
            return GameStatus::Won {
                winner: Side::Dark,
                reason: WinReason::Elimination,
            };
        }
        if pos.count_pieces(Side::Dark) == 0 {
            return GameStatus::Won {
                winner: Side::Light,
                reason: WinReason::Elimination,
            };
        }
        if pos.no_capture_clock >= NO_CAPTURE_LIMIT {
            return GameStatus::Drawn(DrawReason::NoCaptureLimit);
        }
        if seen >= REPETITION_LIMIT {
            return GameStatus::Drawn(DrawReason::ThreefoldRepetition);
        }
        if legal_moves(pos).is_empty() {
            return GameStatus::Won {
                winner: pos.side_to_move.other(),
                reason: WinReason::NoMoves,
            };
        }
        GameStatus::InProgress
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn initial_status(pos: &Position) -> GameStatus {
    if pos.count_pieces(Side::Light) == 0 {
        GameStatus::Won {
            winner: Side::Dark,
            reason: WinReason::Elimination,
        }
    } else if pos.count_pieces(Side::Dark) == 0 {
        GameStatus::Won {
            winner: Side::Light,
            reason: WinReason::Elimination,
        }
    } else if legal_moves(pos).is_empty() {
        GameStatus::Won {
            winner: pos.side_to_move.other(),
            reason: WinReason::NoMoves,
        }
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
