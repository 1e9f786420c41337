//! Static heuristic evaluation of a position for one side.
//!
//! A weighted sum over each side's pieces, squashed through tanh so the
//! result lives in [-1, 1] and composes with terminal utilities of +/-1.

use crate::movegen::{is_threatened, jumps_from, steps_from};
use crate::{board::Position, types::*};

const KING_WEIGHT: f32 = 1.5;
const SAFE_PIECE_WEIGHT: f32 = 0.2;
const MOBILITY_WEIGHT: f32 = 0.05;
const JUMP_WEIGHT: f32 = 1.0;
const PROMOTION_POTENTIAL_WEIGHT: f32 = 0.3;
const THREATENED_PENALTY_WEIGHT: f32 = 1.2;

/// Score the position for `side`, higher is better. Bounded to [-1, 1].
pub fn evaluate(pos: &Position, side: Side) -> f32 {
    let diff = side_score(pos, side) - side_score(pos, side.other());
    (diff / 10.0).tanh().clamp(-1.0, 1.0)
}

fn side_score(pos: &Position, side: Side) -> f32 {
    let mut pieces = 0.0f32;
    let mut kings = 0.0f32;
    let mut mobility = 0.0f32;
    let mut jumps = 0.0f32;
    let mut promotion_potential = 0.0f32;
    let mut safe_pieces = 0.0f32;
    let mut threatened = 0.0f32;

    for square in 0..64u8 {
        let pc = match pos.piece_at(square) {
            Some(p) if p.side == side => p,
            _ => continue,
        };
        pieces += 1.0;
        mobility += steps_from(pos, square).len() as f32;
        jumps += jumps_from(pos, square).len() as f32;
        if is_threatened(pos, square) {
            threatened += 1.0;
        }

        let row = row_of(square);
        let col = col_of(square);
        let own_back_rank = side.other().promotion_row();
        // Edge columns and the own back rank can never be jumped; a king that
        // reached the far rank counts as safely kinged.
        let mut safe = col == 0 || col == 7 || row == own_back_rank;

        if pc.king {
            kings += 1.0;
            safe = safe || row == side.promotion_row();
        } else {
            let dist = (side.promotion_row() - row).abs();
            if dist > 0 {
                promotion_potential += 1.0 / dist as f32;
            }
        }
        if safe {
            safe_pieces += 1.0;
        }
    }

    pieces
        + kings * KING_WEIGHT
        + mobility * MOBILITY_WEIGHT
        + jumps * JUMP_WEIGHT
        + promotion_potential * PROMOTION_POTENTIAL_WEIGHT
        + safe_pieces * SAFE_PIECE_WEIGHT
        - threatened * THREATENED_PENALTY_WEIGHT
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
