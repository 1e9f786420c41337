/// The two sides of a checkers game. Dark sits on rows 0..3, moves first,
/// and advances toward row 7; Light sits on rows 5..8 and advances toward row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Dark,
    Light,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Dark => Side::Light,
            Side::Light => Side::Dark,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Side::Dark => 0,
            Side::Light => 1,
        }
    }

    /// Row direction a man (non-king) of this side advances in.
    pub fn forward(self) -> i8 {
        match self {
            Side::Dark => 1,
            Side::Light => -1,
        }
    }

    /// The opponent's home rank, where a man of this side is crowned.
    pub fn promotion_row(self) -> i8 {
        match self {
            Side::Dark => 7,
            Side::Light => 0,
        }
    }
}

/// A single checker. The owning square is the board index holding the piece;
/// `origin` is the square it was created on and never changes. `id` is unique
/// within its side. The king flag is monotonic: it is only ever set, never cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub side: Side,
    pub id: u8,
    pub origin: u8,
    pub king: bool,
}

/// A simple diagonal step (`captured` is None) or a jump two diagonal squares
/// away over an opposing piece (`captured` is the square in between).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: u8, // 0..63
    pub to: u8,   // 0..63
    pub captured: Option<u8>,
}

impl Move {
    pub fn step(from: u8, to: u8) -> Self {
        Self {
            from,
            to,
            captured: None,
        }
    }

    pub fn jump(from: u8, to: u8, captured: u8) -> Self {
        Self {
            from,
            to,
            captured: Some(captured),
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", sq_to_coord(self.from), sep, sq_to_coord(self.to))
    }
}

// Helpers
pub fn row_of(sq: u8) -> i8 {
    (sq / 8) as i8
}
pub fn col_of(sq: u8) -> i8 {
    (sq % 8) as i8
}
pub fn sq(row: i8, col: i8) -> Option<u8> {
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some((row as u8) * 8 + (col as u8))
    } else {
        None
    }
}

/// Only squares with odd row+col host pieces; the rest stay empty for the
/// whole game.
pub fn is_playable(sq: u8) -> bool {
    (row_of(sq) + col_of(sq)) % 2 == 1
}

pub fn sq_to_coord(sq: u8) -> String {
    let c = (b'a' + (sq % 8)) as char;
    let r = (b'1' + (sq / 8)) as char;
    format!("{c}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<u8> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let col = b[0];
    let row = b[1];
    if !(b'a'..=b'h').contains(&col) || !(b'1'..=b'8').contains(&row) {
        return None;
    }
    Some((row - b'1') * 8 + (col - b'a'))
}
