//! Board value types
//!
//! Raw engine codes are converted into [`CellCode`] at the parser boundary and
//! never travel further as integers.

use std::fmt;

/// Color of a Morelli piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceColor {
    Black,
    White,
}

impl PieceColor {
    pub fn opposite(self) -> Self {
        match self {
            PieceColor::Black => PieceColor::White,
            PieceColor::White => PieceColor::Black,
        }
    }

    /// Player atom the rule engine expects in move requests
    pub fn player_atom(self) -> &'static str {
        match self {
            PieceColor::Black => "blackPlayer",
            PieceColor::White => "whitePlayer",
        }
    }
}

/// A piece sitting on a cell or carried by an orphan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: PieceColor,
}

impl Piece {
    pub fn new(color: PieceColor) -> Self {
        Self { color }
    }
}

/// Parsed snapshot code for one cell
///
/// `0`, `1` and `2` are the only codes the client interprets. Anything else
/// (the engine uses negative codes for special squares) is carried through
/// untouched so it can be sent back verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellCode {
    #[default]
    Empty,
    Black,
    White,
    Other(i64),
}

impl CellCode {
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            0 => CellCode::Empty,
            1 => CellCode::Black,
            2 => CellCode::White,
            other => CellCode::Other(other),
        }
    }

    pub fn raw(self) -> i64 {
        match self {
            CellCode::Empty => 0,
            CellCode::Black => 1,
            CellCode::White => 2,
            CellCode::Other(raw) => raw,
        }
    }

    /// Piece color this code places on the board, if any
    pub fn piece_color(self) -> Option<PieceColor> {
        match self {
            CellCode::Black => Some(PieceColor::Black),
            CellCode::White => Some(PieceColor::White),
            CellCode::Empty | CellCode::Other(_) => None,
        }
    }
}

impl fmt::Display for CellCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw())
    }
}

/// Zero-based board coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position::new(row, col)
    }
}
