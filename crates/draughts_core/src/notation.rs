//! Structured parsing of coordinate move text.
//!
//! The accepted grammar is exactly `<from><sep><to>` where a square is a
//! column letter a..h followed by a row digit 1..8, and the separator is `-`
//! for a step or `x` for a jump. Anything else is rejected before the
//! transition engine is reached; a well-formed move is then resolved against
//! the legal move list, so only legal moves can ever be applied.

use thiserror::Error;

use crate::board::Position;
use crate::movegen::legal_moves;
use crate::types::{coord_to_sq, Move};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("malformed move text {0:?}, expected e.g. \"b3-a4\" or \"b3xd5\"")]
    Malformed(String),
    #[error("invalid square {0:?}")]
    BadSquare(String),
    #[error("{0:?} does not name a legal move in this position")]
    NotLegal(String),
    #[error("{0:?} uses the wrong separator: '-' is a step, 'x' is a jump")]
    WrongSeparator(String),
}

/// Parse a square coordinate like `"b3"`.
pub fn parse_square(txt: &str) -> Result<u8, NotationError> {
    coord_to_sq(txt).ok_or_else(|| NotationError::BadSquare(txt.to_string()))
}

/// Parse move text into (from, to, is_jump) without consulting a position.
pub fn parse_move(txt: &str) -> Result<(u8, u8, bool), NotationError> {
    let malformed = || NotationError::Malformed(txt.to_string());
    if txt.len() != 5 || !txt.is_ascii() {
        return Err(malformed());
    }
    let sep = txt.as_bytes()[2] as char;
    let is_jump = match sep {
        '-' => false,
        'x' => true,
        _ => return Err(malformed()),
    };
    let from = coord_to_sq(&txt[..2]).ok_or_else(malformed)?;
    let to = coord_to_sq(&txt[3..]).ok_or_else(malformed)?;
    Ok((from, to, is_jump))
}

/// Parse move text and resolve it against the position's legal moves.
/// The separator must agree with the move kind it names.
pub fn resolve_move(pos: &Position, txt: &str) -> Result<Move, NotationError> {
    let (from, to, is_jump) = parse_move(txt)?;
    let mv = legal_moves(pos)
        .into_iter()
        .find(|m| m.from == from && m.to == to)
        .ok_or_else(|| NotationError::NotLegal(txt.to_string()))?;
    if mv.is_capture() != is_jump {
        return Err(NotationError::WrongSeparator(txt.to_string()));
    }
    Ok(mv)
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
