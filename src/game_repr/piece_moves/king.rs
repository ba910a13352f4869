use crate::game_repr::{Color, Piece, Position, Square, Type};

use super::Destinations;

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

impl Position {
    /// One-square king moves (no castling)
    pub fn king_steps_into(&self, from: Square, color: Color, moves: &mut Destinations) {
        self.step_into(from, color, &KING_OFFSETS, moves);
    }

    /// Castling destinations for the king on `from`.
    ///
    /// Rights and board geometry are checked independently: the flag must be
    /// set, the king and rook must stand on their home squares, the squares
    /// between them must be empty, the king must not be in check, and neither
    /// square the king crosses may be attacked.
    pub fn castling_moves_into(&self, from: Square, color: Color, moves: &mut Destinations) {
        let home = color.home_row();
        if from != Square::new(home, 4) || self.board.get(from) != Some(Piece::new(color, Type::King)) {
            return;
        }

        let rights = self.castling.side(color);
        if !rights.kingside && !rights.queenside {
            return;
        }
        if self.is_in_check(color) {
            return;
        }

        if rights.kingside
            && self.castling_path_clear(color, 7, &[5, 6])
            && self.king_can_cross(from, &[5, 6])
        {
            moves.push(Square::new(home, 6));
        }

        if rights.queenside
            && self.castling_path_clear(color, 0, &[1, 2, 3])
            && self.king_can_cross(from, &[3, 2])
        {
            moves.push(Square::new(home, 2));
        }
    }

    fn castling_path_clear(&self, color: Color, rook_col: u8, between: &[u8]) -> bool {
        let home = color.home_row();
        self.board.get(Square::new(home, rook_col)) == Some(Piece::new(color, Type::Rook))
            && between.iter().all(|&col| self.board.is_empty(Square::new(home, col)))
    }

    fn king_can_cross(&self, from: Square, cols: &[u8]) -> bool {
        cols.iter()
            .all(|&col| self.step_is_safe(from, Square::new(from.row, col)))
    }
}
