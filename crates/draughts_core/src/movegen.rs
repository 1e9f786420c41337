use crate::{board::Position, types::*};

const ALL_DIRS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

/// Diagonal directions a piece may move in: forward only for men, all four
/// for kings.
fn directions(piece: Piece) -> &'static [(i8, i8)] {
    if piece.king {
        &ALL_DIRS
    } else {
        match piece.side {
            Side::Dark => &ALL_DIRS[..2],
            Side::Light => &ALL_DIRS[2..],
        }
    }
}

/// All legal moves for the side to move, mandatory-capture rule applied: if
/// any jump exists anywhere, only jumps are returned. While a multi-jump is
/// pending, only continuations of the jumping piece are legal.
///
/// Pure and deterministic: equal positions yield the same move list.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    if let Some(square) = pos.chain {
        return jumps_from(pos, square);
    }

    let mut jumps = Vec::new();
    let mut steps = Vec::new();
    for square in 0..64u8 {
        let pc = match pos.piece_at(square) {
            Some(p) => p,
            None => continue,
        };
        if pc.side != pos.side_to_move {
            continue;
        }
        jumps_into(pos, square, pc, &mut jumps);
        if jumps.is_empty() {
            steps_into(pos, square, pc, &mut steps);
        }
    }

    if jumps.is_empty() {
        steps
    } else {
        jumps
    }
}

/// Jumps available to the piece on `from`, regardless of whose turn it is.
pub fn jumps_from(pos: &Position, from: u8) -> Vec<Move> {
    let mut out = Vec::new();
    if let Some(pc) = pos.piece_at(from) {
        jumps_into(pos, from, pc, &mut out);
    }
    out
}

/// Simple steps available to the piece on `from`, regardless of whose turn
/// it is.
pub fn steps_from(pos: &Position, from: u8) -> Vec<Move> {
    let mut out = Vec::new();
    if let Some(pc) = pos.piece_at(from) {
        steps_into(pos, from, pc, &mut out);
    }
    out
}

fn jumps_into(pos: &Position, from: u8, pc: Piece, out: &mut Vec<Move>) {
    let r = row_of(from);
    let c = col_of(from);
    for &(dr, dc) in directions(pc) {
        let over = match sq(r + dr, c + dc) {
            Some(s) => s,
            None => continue,
        };
        let landing = match sq(r + 2 * dr, c + 2 * dc) {
            Some(s) => s,
            None => continue,
        };
        match pos.piece_at(over) {
            Some(enemy) if enemy.side != pc.side && pos.piece_at(landing).is_none() => {
                out.push(Move::jump(from, landing, over));
            }
            _ => {}
        }
    }
}

fn steps_into(pos: &Position, from: u8, pc: Piece, out: &mut Vec<Move>) {
    let r = row_of(from);
    let c = col_of(from);
    for &(dr, dc) in directions(pc) {
        if let Some(to) = sq(r + dr, c + dc) {
            if pos.piece_at(to).is_none() {
                out.push(Move::step(from, to));
            }
        }
    }
}

/// True if an opposing piece could jump the piece on `square` next move,
/// assuming the landing square behind it is empty.
pub fn is_threatened(pos: &Position, square: u8) -> bool {
    let pc = match pos.piece_at(square) {
        Some(p) => p,
        None => return false,
    };
    let r = row_of(square);
    let c = col_of(square);
    for &(dr, dc) in &ALL_DIRS {
        let attacker_sq = match sq(r + dr, c + dc) {
            Some(s) => s,
            None => continue,
        };
        let landing = match sq(r - dr, c - dc) {
            Some(s) => s,
            None => continue,
        };
        let attacker = match pos.piece_at(attacker_sq) {
            Some(a) if a.side != pc.side => a,
            _ => continue,
        };
        if pos.piece_at(landing).is_some() {
            continue;
        }
        // The attacker jumps toward `landing`; men can only jump forward.
        if attacker.king || -dr == attacker.side.forward() {
            return true;
        }
    }
    false
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
