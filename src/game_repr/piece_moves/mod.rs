pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use smallvec::SmallVec;

use super::{Color, Move, Position, Square, Type};

/// Destination squares for a single piece (a queen tops out at 27)
pub type Destinations = SmallVec<[Square; 32]>;

/// Moves for a whole side
pub type MoveList = SmallVec<[Move; 64]>;

impl Position {
    /// Pseudo-legal destinations of the piece on `from`, castling excluded.
    /// An empty square yields nothing.
    pub fn pseudo_legal_moves_into(&self, from: Square, out: &mut Destinations) {
        let Some(piece) = self.board.get(from) else {
            return;
        };
        let color = piece.color;

        match piece.piece_type {
            Type::Pawn   => self.pawn_moves_into(from, color, out),
            Type::Knight => self.knight_moves_into(from, color, out),
            Type::Bishop => self.bishop_moves_into(from, color, out),
            Type::Rook   => self.rook_moves_into(from, color, out),
            Type::Queen  => self.queen_moves_into(from, color, out),
            Type::King   => self.king_steps_into(from, color, out),
        }
    }

    pub fn pseudo_legal_moves(&self, from: Square) -> Destinations {
        let mut out = Destinations::new();
        self.pseudo_legal_moves_into(from, &mut out);
        out
    }

    /// Every pseudo-legal (from, to) pair for `color`, castling excluded
    pub fn all_pseudo_legal_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        let mut destinations = Destinations::new();

        for (from, _) in self.board.pieces_of(color) {
            destinations.clear();
            self.pseudo_legal_moves_into(from, &mut destinations);
            moves.extend(destinations.iter().map(|&to| Move::new(from, to)));
        }
        moves
    }

    /// Shared ray walker for rooks, bishops and queens.
    /// Stops at the first occupied square, keeping it only when it holds an enemy.
    pub(crate) fn slide_into(&self, from: Square, color: Color, directions: &[(i8, i8)], out: &mut Destinations) {
        for &(d_row, d_col) in directions {
            let mut current = from;
            for _ in 1..8 {
                let Some(next) = current.offset(d_row, d_col) else {
                    break;
                };
                match self.board.get(next) {
                    None => out.push(next),
                    Some(occupant) => {
                        if occupant.color != color {
                            out.push(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
    }

    /// Fixed-offset jumper shared by knights and kings
    pub(crate) fn step_into(&self, from: Square, color: Color, offsets: &[(i8, i8)], out: &mut Destinations) {
        for &(d_row, d_col) in offsets {
            if let Some(target) = from.offset(d_row, d_col) {
                match self.board.get(target) {
                    Some(occupant) if occupant.color == color => {}
                    _ => out.push(target),
                }
            }
        }
    }
}
