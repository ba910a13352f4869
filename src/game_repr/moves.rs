/*-------COORDINATES--------*/

// Row 0 is black's back rank (rank 8), row 7 is white's (rank 1).
// Column 0 is the a-file.

use super::piece::{Color, Piece, Type};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// `row` and `col` must lie in `0..8`; use [`Square::try_new`] for
    /// unchecked input. Off-board squares read as empty through
    /// [`Board::get`](super::Board::get) but must never be written.
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Builds a square from signed coordinates, `None` when off the board
    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    /// Parses algebraic notation such as `e4`
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }
        let col = file as u8 - b'a';
        let row = 7 - (rank as u8 - b'1');
        Some(Self::new(row, col))
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        write!(f, "{}{}", file, rank)
    }
}

/// A move request. `promotion` carries the piece a pawn turns into on the
/// back rank; the legal-move generator fills it with a queen as a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Type>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Move {
        Self { from, to, promotion: None }
    }

    pub fn with_promotion(from: Square, to: Square, promotion: Type) -> Move {
        Self { from, to, promotion: Some(promotion) }
    }

    /// Parses coordinate notation: `e2e4`, `e7e8q`
    pub fn parse(s: &str) -> Option<Move> {
        let s = s.trim();
        if s.len() < 4 || s.len() > 5 || !s.is_ascii() {
            return None;
        }
        let from = Square::parse(&s[0..2])?;
        let to = Square::parse(&s[2..4])?;
        let promotion = match s[4..].chars().next() {
            Some(c) => Some(Type::from_char(c).filter(|t| t.is_promotion_target())?),
            None => None,
        };
        Some(Self { from, to, promotion })
    }

    pub fn is_same_path(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideRights {
    pub kingside: bool,
    pub queenside: bool,
}

/// Castling availability. Flags only ever go from true to false during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white: SideRights,
    pub black: SideRights,
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

impl CastlingRights {
    pub const fn all() -> Self {
        let both = SideRights { kingside: true, queenside: true };
        Self { white: both, black: both }
    }

    pub const fn none() -> Self {
        let neither = SideRights { kingside: false, queenside: false };
        Self { white: neither, black: neither }
    }

    pub fn side(&self, color: Color) -> SideRights {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    pub fn side_mut(&mut self, color: Color) -> &mut SideRights {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    pub fn revoke_all(&mut self, color: Color) {
        *self.side_mut(color) = SideRights { kingside: false, queenside: false };
    }
}

/// Everything needed to take a move back exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The piece as it stood on `from` (a pawn for promotions)
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub was_en_passant: bool,
    pub prior_en_passant: Option<Square>,
    pub prior_castling: CastlingRights,
    pub promotion: Option<Type>,
}

impl MoveRecord {
    pub fn is_castling(&self) -> bool {
        self.piece.piece_type == Type::King && self.from.col.abs_diff(self.to.col) == 2
    }

    pub fn as_move(&self) -> Move {
        Move { from: self.from, to: self.to, promotion: self.promotion }
    }
}
