use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to create an empty board, white to move, no castling rights
pub fn empty_board() -> Position {
    Position::from_board(Board::empty(), Color::White)
}

/// Square from algebraic notation
pub fn sq(name: &str) -> Square {
    Square::parse(name).unwrap()
}

/// Helper function to place a piece
pub fn place_piece(pos: &mut Position, name: &str, color: Color, piece_type: Type) {
    pos.board.place(sq(name), Piece::new(color, piece_type));
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    moves.iter().any(|m| m.from == sq(from) && m.to == sq(to))
}

/// Plays a coordinate move on a position without legality checks
pub fn play(pos: &mut Position, mv: &str) -> MoveRecord {
    pos.make_move(Move::parse(mv).unwrap()).unwrap()
}

/// Applies a coordinate move through the game state, expecting success
pub fn apply(state: &mut GameState, mv: &str) -> MoveOutcome {
    let mv = Move::parse(mv).unwrap();
    state.apply_move(mv.from, mv.to, mv.promotion).unwrap()
}

pub fn fen(s: &str) -> Position {
    Position::from_fen(s).unwrap()
}

// ==================== TEST MODULES ====================

mod en_passant;
mod stalemate;
mod perft;
