use crate::game_repr::{Color, Position, Square};

use super::Destinations;

/// Row a pawn of `color` lands on when capturing en passant
fn en_passant_landing_row(color: Color) -> u8 {
    match color {
        Color::White => 2,
        Color::Black => 5,
    }
}

impl Position {
    /// Generate pawn moves into a provided buffer: pushes, double push from
    /// the starting row, diagonal captures and the en-passant capture.
    pub fn pawn_moves_into(&self, from: Square, color: Color, moves: &mut Destinations) {
        let forward = color.forward();

        if let Some(one) = from.offset(forward, 0) {
            if self.board.is_empty(one) {
                moves.push(one);

                if from.row == color.pawn_row() {
                    if let Some(two) = from.offset(2 * forward, 0) {
                        if self.board.is_empty(two) {
                            moves.push(two);
                        }
                    }
                }
            }
        }

        for d_col in [-1, 1] {
            let Some(target) = from.offset(forward, d_col) else {
                continue;
            };
            match self.board.get(target) {
                Some(occupant) if occupant.color != color => moves.push(target),
                None if self.en_passant == Some(target)
                    && target.row == en_passant_landing_row(color) =>
                {
                    moves.push(target)
                }
                _ => {}
            }
        }
    }

    /// Pawns attack diagonally forward whatever stands there; pushes never attack
    pub(crate) fn pawn_attacks(from: Square, color: Color, target: Square) -> bool {
        from.row as i8 + color.forward() == target.row as i8 && from.col.abs_diff(target.col) == 1
    }
}
