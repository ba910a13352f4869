use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Type {
    /// Piece types a pawn may promote to, strongest first
    pub const PROMOTIONS: [Type; 4] = [Type::Queen, Type::Rook, Type::Bishop, Type::Knight];

    /// Material value in centipawns
    pub fn value(self) -> i32 {
        match self {
            Type::Pawn => 100,
            Type::Knight => 320,
            Type::Bishop => 330,
            Type::Rook => 500,
            Type::Queen => 900,
            Type::King => 20000,
        }
    }

    pub fn is_promotion_target(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(Type::Pawn),
            'n' => Some(Type::Knight),
            'b' => Some(Type::Bishop),
            'r' => Some(Type::Rook),
            'q' => Some(Type::Queen),
            'k' => Some(Type::King),
            _ => None,
        }
    }

    /// Lowercase letter used by FEN and coordinate notation
    pub fn to_char(self) -> char {
        match self {
            Type::Pawn => 'p',
            Type::Knight => 'n',
            Type::Bishop => 'b',
            Type::Rook => 'r',
            Type::Queen => 'q',
            Type::King => 'k',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row delta of a pawn advance (white moves towards row 0)
    pub fn forward(self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// Row holding this color's king and rooks at the start
    pub fn home_row(self) -> u8 {
        match self {
            Self::White => 7,
            Self::Black => 0,
        }
    }

    pub fn pawn_row(self) -> u8 {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Piece {
    pub const fn new(color: Color, piece_type: Type) -> Self {
        Self { color, piece_type }
    }

    /// Parses a FEN piece letter: uppercase is white, lowercase black
    pub fn from_char(c: char) -> Option<Self> {
        let piece_type = Type::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { color, piece_type })
    }

    pub fn to_char(&self) -> char {
        let c = self.piece_type.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn is(&self, color: Color) -> bool {
        self.color == color
    }

    pub fn is_kind(&self, color: Color, piece_type: Type) -> bool {
        self.color == color && self.piece_type == piece_type
    }

    pub fn value(&self) -> i32 {
        self.piece_type.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_letters() {
        for c in "pnbrqkPNBRQK".chars() {
            let piece = Piece::from_char(c).unwrap();
            assert_eq!(piece.to_char(), c);
        }
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::from_char('Q'), Some(Piece::new(Color::White, Type::Queen)));
    }

    #[test]
    fn test_promotion_targets() {
        assert!(Type::Queen.is_promotion_target());
        assert!(Type::Knight.is_promotion_target());
        assert!(!Type::King.is_promotion_target());
        assert!(!Type::Pawn.is_promotion_target());
    }
}
