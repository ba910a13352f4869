use crate::game_repr::{Color, Position, Square};

use super::Destinations;

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Position {
    /// Generate bishop moves into a provided buffer
    pub fn bishop_moves_into(&self, from: Square, color: Color, moves: &mut Destinations) {
        self.slide_into(from, color, &DIAGONALS, moves);
    }
}
