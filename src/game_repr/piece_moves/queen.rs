use crate::game_repr::{Color, Position, Square};

use super::Destinations;

impl Position {
    /// Queen = rook rays followed by bishop rays
    pub fn queen_moves_into(&self, from: Square, color: Color, moves: &mut Destinations) {
        self.rook_moves_into(from, color, moves);
        self.bishop_moves_into(from, color, moves);
    }
}
