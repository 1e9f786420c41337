//! Zobrist hashing for checkers positions.
//!
//! The hash is the canonical position representation used for threefold
//! repetition tracking and the transposition table: it covers piece placement
//! (side and king status per square), the side to move, and the mid-chain
//! square of an unfinished multi-jump. Piece ids and origins are deliberately
//! excluded so transposed positions collapse to the same key.

use crate::types::Piece;

/// Pre-computed random values for Zobrist hashing.
/// Generated using a fixed seed for reproducibility.
pub struct ZobristKeys {
    /// Random values for each checker on each square.
    /// Indexed by [side][man=0 / king=1][square]
    pub pieces: [[[u64; 64]; 2]; 2],
    /// Random value XOR-ed in when Light is to move
    pub side_to_move: u64,
    /// Random values for the pending multi-jump square
    pub chain: [u64; 64],
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristKeys {
    /// Generate Zobrist keys using a simple PRNG with fixed seed.
    /// Uses xorshift64 for fast, reproducible random numbers.
    pub const fn new() -> Self {
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x9E3779B97F4A7C15u64; // Fixed seed

        let mut pieces = [[[0u64; 64]; 2]; 2];
        let mut side = 0;
        while side < 2 {
            let mut rank = 0;
            while rank < 2 {
                let mut sq = 0;
                while sq < 64 {
                    state = xorshift64(state);
                    pieces[side][rank][sq] = state;
                    sq += 1;
                }
                rank += 1;
            }
            side += 1;
        }

        state = xorshift64(state);
        let side_to_move = state;

        let mut chain = [0u64; 64];
        let mut i = 0;
        while i < 64 {
            state = xorshift64(state);
            chain[i] = state;
            i += 1;
        }

        ZobristKeys {
            pieces,
            side_to_move,
            chain,
        }
    }

    /// Get the Zobrist key for a piece on a square.
    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: u8) -> u64 {
        self.pieces[piece.side.idx()][piece.king as usize][sq as usize]
    }

    /// Get the Zobrist key for a pending multi-jump square.
    #[inline(always)]
    pub fn chain_key(&self, sq: u8) -> u64 {
        self.chain[sq as usize]
    }
}

/// Global static Zobrist keys, computed at compile time.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
