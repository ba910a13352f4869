use crate::game_repr::{Color, Position, Square};

use super::Destinations;

pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

impl Position {
    /// Generate rook moves into a provided buffer
    pub fn rook_moves_into(&self, from: Square, color: Color, moves: &mut Destinations) {
        self.slide_into(from, color, &ORTHOGONALS, moves);
    }
}
