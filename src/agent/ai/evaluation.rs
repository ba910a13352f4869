// Position evaluation function
// Returns score in centipawns (positive = good for the perspective color)

use crate::game_repr::{CapturedPieces, Color, Position, Type};
use super::piece_square_tables::get_pst_value;

/// Weight of one move of mobility difference
const MOBILITY_WEIGHT: i32 = 2;

/// Penalty per extra pawn on a file
const DOUBLED_PAWN_PENALTY: i32 = 10;

/// Fewer pieces than this on the board means the king switches tables
const ENDGAME_PIECE_COUNT: usize = 12;

/// Evaluate a position from `perspective`'s point of view.
///
/// The raw score is white-positive and is built from:
/// * material plus piece-square bonus of every piece on the board
/// * the value of the captured pieces (white losses subtract, black losses add)
/// * mobility: 2 per pseudo-legal move of difference
/// * doubled pawns: 10 per extra pawn on a file
///
/// Captured material is counted on top of the board material on purpose;
/// the search compares positions that share the same captured lists.
pub fn evaluate(pos: &Position, perspective: Color, captured: &CapturedPieces) -> i32 {
    let endgame = is_endgame(pos);

    let mut score = evaluate_material_and_position(pos, endgame);
    score += evaluate_captured(captured);
    score += evaluate_mobility(pos);
    score -= count_doubled_pawns(pos, Color::White) * DOUBLED_PAWN_PENALTY;
    score += count_doubled_pawns(pos, Color::Black) * DOUBLED_PAWN_PENALTY;

    match perspective {
        Color::White => score,
        Color::Black => -score,
    }
}

/// Fewer than 12 pieces on the board, or no queens left
pub fn is_endgame(pos: &Position) -> bool {
    let mut pieces = 0;
    let mut queens = 0;
    for (_, piece) in pos.board.pieces() {
        pieces += 1;
        if piece.piece_type == Type::Queen {
            queens += 1;
        }
    }
    pieces < ENDGAME_PIECE_COUNT || queens == 0
}

/// Sum over files of `pawns on file - 1` for files holding more than one pawn of `color`
pub fn count_doubled_pawns(pos: &Position, color: Color) -> i32 {
    let mut file_pawn_counts = [0i32; 8];
    for (square, piece) in pos.board.pieces_of(color) {
        if piece.piece_type == Type::Pawn {
            file_pawn_counts[square.col as usize] += 1;
        }
    }

    file_pawn_counts
        .iter()
        .filter(|&&count| count > 1)
        .map(|count| count - 1)
        .sum()
}

/// Material and piece-square tables, white-positive
fn evaluate_material_and_position(pos: &Position, is_endgame: bool) -> i32 {
    let mut score = 0;

    for (square, piece) in pos.board.pieces() {
        let value = piece.value() + get_pst_value(piece.piece_type, piece.color, square, is_endgame);
        match piece.color {
            Color::White => score += value,
            Color::Black => score -= value,
        }
    }

    score
}

fn evaluate_captured(captured: &CapturedPieces) -> i32 {
    let white_lost: i32 = captured.white.iter().map(|p| p.value()).sum();
    let black_lost: i32 = captured.black.iter().map(|p| p.value()).sum();
    black_lost - white_lost
}

/// Pseudo-legal move counts; castling is left out
fn evaluate_mobility(pos: &Position) -> i32 {
    let white = pos.all_pseudo_legal_moves(Color::White).len() as i32;
    let black = pos.all_pseudo_legal_moves(Color::Black).len() as i32;
    (white - black) * MOBILITY_WEIGHT
}
