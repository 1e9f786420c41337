use thiserror::Error;

use crate::movegen::{jumps_from, legal_moves};
use crate::types::*;
use crate::zobrist::ZOBRIST;

/// Consecutive non-capturing, non-promoting plies after which a tracked game
/// is drawn.
pub const NO_CAPTURE_LIMIT: u32 = 40;

/// Canonical-position occurrences after which a tracked game is drawn.
pub const REPETITION_LIMIT: u32 = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("illegal move {0}")]
    IllegalMove(Move),
    #[error("the game is already over")]
    GameOver,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagramError {
    #[error("expected 8 rows of 8 cells, got {rows} rows")]
    BadDimensions { rows: usize },
    #[error("row {row} has {cells} cells, expected 8")]
    BadRow { row: usize, cells: usize },
    #[error("invalid cell character {0:?}")]
    BadChar(char),
    #[error("piece on non-playable square (row {row}, col {col})")]
    UnplayableSquare { row: usize, col: usize },
}

/// A board snapshot: piece placement, the side to move, the no-capture draw
/// clock, and the square of a piece that must continue a multi-jump.
///
/// Positions are values: `apply` returns a new position and never touches the
/// original, so search can explore hypothetical futures freely. The no-capture
/// clock only advances when `apply` is called with draw tracking enabled;
/// untracked (speculative) applies leave it frozen at the live game's value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Side,
    pub no_capture_clock: u32,
    /// When a capturing leg leaves the same piece with a further mandatory
    /// jump, this records its square. While set, the side to move does not
    /// change and move generation is restricted to jumps from this square.
    pub chain: Option<u8>,
}

impl Position {
    /// Standard setup: three rows of men per side on the playable squares,
    /// Dark on rows 0..3, Light on rows 5..8, Dark to move.
    pub fn startpos() -> Self {
        let mut p = Position {
            board: [None; 64],
            side_to_move: Side::Dark,
            no_capture_clock: 0,
            chain: None,
        };

        let mut next_id = [1u8; 2];
        for row in 0..8i8 {
            let side = match row {
                0..=2 => Side::Dark,
                5..=7 => Side::Light,
                _ => continue,
            };
            for col in 0..8i8 {
                if (row + col) % 2 != 1 {
                    continue;
                }
                let square = sq(row, col).expect("setup square in range");
                p.board[square as usize] = Some(Piece {
                    side,
                    id: next_id[side.idx()],
                    origin: square,
                    king: false,
                });
                next_id[side.idx()] += 1;
            }
        }
        p
    }

    /// Build a position from an 8-line ASCII diagram, first line = row 0
    /// (Dark's back rank). Cells: `.` empty, `b`/`w` men, `B`/`W` kings.
    /// Whitespace between cells is ignored. Ids are assigned in reading order.
    pub fn from_diagram(diagram: &str, side_to_move: Side) -> Result<Self, DiagramError> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|l| l.split_whitespace().collect::<String>().chars().collect())
            .filter(|cells: &Vec<char>| !cells.is_empty())
            .collect();
        if rows.len() != 8 {
            return Err(DiagramError::BadDimensions { rows: rows.len() });
        }

        let mut p = Position {
            board: [None; 64],
            side_to_move,
            no_capture_clock: 0,
            chain: None,
        };
        let mut next_id = [1u8; 2];

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != 8 {
                return Err(DiagramError::BadRow {
                    row,
                    cells: cells.len(),
                });
            }
            for (col, &ch) in cells.iter().enumerate() {
                let (side, king) = match ch {
                    '.' => continue,
                    'b' => (Side::Dark, false),
                    'B' => (Side::Dark, true),
                    'w' => (Side::Light, false),
                    'W' => (Side::Light, true),
                    _ => return Err(DiagramError::BadChar(ch)),
                };
                let square = (row * 8 + col) as u8;
                if !is_playable(square) {
                    return Err(DiagramError::UnplayableSquare { row, col });
                }
                p.board[square as usize] = Some(Piece {
                    side,
                    id: next_id[side.idx()],
                    origin: square,
                    king,
                });
                next_id[side.idx()] += 1;
            }
        }
        Ok(p)
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }

    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    pub fn count_pieces(&self, side: Side) -> u32 {
        self.board
            .iter()
            .flatten()
            .filter(|pc| pc.side == side)
            .count() as u32
    }

    /// Apply a move, producing the successor position.
    ///
    /// Relocates the piece, removes a captured piece, crowns on the far rank,
    /// and decides whether the turn passes: after a capturing leg, if the same
    /// piece has another jump from its landing square, the mover keeps the
    /// turn and `chain` marks the landing square.
    ///
    /// `track_draw_state` gates the no-capture clock: tracked applies reset it
    /// on a capture or promotion and increment it otherwise; untracked applies
    /// leave it untouched so speculative search cannot perturb draw state.
    pub fn apply(&self, mv: Move, track_draw_state: bool) -> Position {
        let mut next = self.clone();
        next.chain = None;

        let mut piece = next.board[mv.from as usize]
            .take()
            .expect("no piece on from-square");
        if let Some(captured) = mv.captured {
            next.board[captured as usize] = None;
        }

        let mut promoted = false;
        if !piece.king && row_of(mv.to) == piece.side.promotion_row() {
            piece.king = true;
            promoted = true;
        }
        next.board[mv.to as usize] = Some(piece);

        if track_draw_state {
            if mv.is_capture() || promoted {
                next.no_capture_clock = 0;
            } else {
                next.no_capture_clock += 1;
            }
        }

        // Multi-jump continuation: the capturing piece keeps the turn while it
        // still has a jump from its new square.
        if mv.is_capture() && !jumps_from(&next, mv.to).is_empty() {
            next.chain = Some(mv.to);
        } else {
            next.side_to_move = self.side_to_move.other();
        }
        next
    }

    /// Like `apply`, but validates the move against the legal set first.
    /// Rejection leaves no trace: the original position is untouched and no
    /// partial mutation can be observed.
    pub fn apply_checked(
        &self,
        mv: Move,
        track_draw_state: bool,
    ) -> Result<Position, RulesError> {
        if !legal_moves(self).contains(&mv) {
            return Err(RulesError::IllegalMove(mv));
        }
        Ok(self.apply(mv, track_draw_state))
    }

    /// Canonical hash: placement + king status + side to move + pending chain
    /// square. Independent of piece ids and origins, so transposed positions
    /// share a key.
    pub fn position_hash(&self) -> u64 {
        let mut h = 0u64;
        for square in 0..64u8 {
            if let Some(pc) = self.piece_at(square) {
                h ^= ZOBRIST.piece_key(pc, square);
            }
        }
        if self.side_to_move == Side::Light {
            h ^= ZOBRIST.side_to_move;
        }
        if let Some(square) = self.chain {
            h ^= ZOBRIST.chain_key(square);
        }
        h
    }

    /// True when the game cannot continue from here: a side has no pieces,
    /// the side to move has no legal moves, or the no-capture clock has run
    /// out. Repetition draws are session business, not the position's.
    pub fn is_terminal(&self) -> bool {
        self.count_pieces(Side::Dark) == 0
            || self.count_pieces(Side::Light) == 0
            || self.no_capture_clock >= NO_CAPTURE_LIMIT
            || legal_moves(self).is_empty()
    }

    /// Game value for `side`: +1 win, -1 loss, 0 draw or unresolved.
    /// Elimination and stalemate (no legal moves) lose for the stuck side;
    /// running out the no-capture clock is a draw.
    pub fn utility(&self, side: Side) -> i32 {
        if self.count_pieces(side.other()) == 0 {
            return 1;
        }
        if self.count_pieces(side) == 0 {
            return -1;
        }
        if self.no_capture_clock >= NO_CAPTURE_LIMIT {
            return 0;
        }
        if legal_moves(self).is_empty() {
            return if self.side_to_move == side { -1 } else { 1 };
        }
        0
    }
}

impl std::fmt::Display for Position {
    /// Diagram form, row 0 first; kings uppercase. Round-trips through
    /// `from_diagram` up to ids, origins, and draw state.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..8u8 {
            for col in 0..8u8 {
                let ch = match self.piece_at(row * 8 + col) {
                    None => '.',
                    Some(pc) => match (pc.side, pc.king) {
                        (Side::Dark, false) => 'b',
                        (Side::Dark, true) => 'B',
                        (Side::Light, false) => 'w',
                        (Side::Light, true) => 'W',
                    },
                };
                write!(f, "{ch}")?;
                if col < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
