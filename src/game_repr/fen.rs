use super::*;
use crate::error::FenError;

impl Position {
    /// Parses Forsyth-Edwards Notation.
    ///
    /// Only the placement field is required. A missing side defaults to white,
    /// missing castling rights to all four (geometry still has to allow castling),
    /// a missing en-passant field to none. Move counters are ignored.
    pub fn from_fen(fen_str: &str) -> Result<Position, FenError> {
        let parts: Vec<&str> = fen_str.split_whitespace().collect();
        let placement = parts.first().ok_or(FenError::Empty)?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        let mut board = Board::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col: u8 = 0;
            for c in rank.chars() {
                match c {
                    '1'..='8' => {
                        col += c as u8 - b'0';
                        if col > 8 {
                            return Err(FenError::RankLength(row));
                        }
                    }
                    _ => {
                        let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece(c))?;
                        if col >= 8 {
                            return Err(FenError::RankLength(row));
                        }
                        board.place(Square::new(row as u8, col), piece);
                        col += 1;
                    }
                }
            }
            if col != 8 {
                return Err(FenError::RankLength(row));
            }
        }

        let side_to_move = match parts.get(1).copied() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(FenError::InvalidSide(other.to_string())),
        };

        let castling = match parts.get(2).copied() {
            None => CastlingRights::all(),
            Some("-") => CastlingRights::none(),
            Some(field) => {
                let mut rights = CastlingRights::none();
                for c in field.chars() {
                    match c {
                        'K' => rights.white.kingside = true,
                        'Q' => rights.white.queenside = true,
                        'k' => rights.black.kingside = true,
                        'q' => rights.black.queenside = true,
                        _ => return Err(FenError::InvalidCastling(field.to_string())),
                    }
                }
                rights
            }
        };

        let en_passant = match parts.get(3).copied() {
            None | Some("-") => None,
            Some(field) => Some(
                Square::parse(field).ok_or_else(|| FenError::InvalidEnPassant(field.to_string()))?,
            ),
        };

        Ok(Position {
            board,
            side_to_move,
            castling,
            en_passant,
        })
    }

    /// Converts the position to FEN; move counters are written as `0 1`
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for (row, rank) in self.board.rows().iter().enumerate() {
            let mut empty_count = 0;
            for cell in rank {
                match cell {
                    None => empty_count += 1,
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_char());
                    }
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        let mut castling = String::new();
        if self.castling.white.kingside {
            castling.push('K');
        }
        if self.castling.white.queenside {
            castling.push('Q');
        }
        if self.castling.black.kingside {
            castling.push('k');
        }
        if self.castling.black.queenside {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }
        fen.push_str(&format!(" {}", castling));

        match self.en_passant {
            Some(sq) => fen.push_str(&format!(" {}", sq)),
            None => fen.push_str(" -"),
        }

        fen.push_str(" 0 1");
        fen
    }
}
