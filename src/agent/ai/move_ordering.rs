// Move ordering for alpha-beta: captures first, most valuable victim first

use crate::game_repr::{Color, Move, MoveList, Position};

/// Value of whatever stands on the destination square, 0 for quiet moves.
/// En passant lands on an empty square and therefore scores as quiet.
fn capture_value(pos: &Position, mov: &Move) -> i32 {
    pos.board.get(mov.to).map_or(0, |victim| victim.value())
}

/// Sort moves by captured-piece value, highest first.
/// The sort is stable: equal captures keep generation order.
pub fn order_moves(pos: &Position, moves: &mut [Move]) {
    moves.sort_by_key(|mov| std::cmp::Reverse(capture_value(pos, mov)));
}

/// Generate all legal moves for `color` in search order
pub fn generate_ordered_moves(pos: &Position, color: Color) -> MoveList {
    let mut moves = pos.all_legal_moves(color);
    order_moves(pos, &mut moves);
    moves
}
