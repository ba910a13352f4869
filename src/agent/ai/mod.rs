// Computer opponent - fixed-depth minimax with alpha-beta pruning
//
// - Deterministic: the same position and captured lists always give the same move
// - Capture-first move ordering for better pruning
// - Static evaluation: material, piece-square tables, captured material,
//   mobility and doubled pawns
// - No quiescence, iterative deepening or transposition table

mod evaluation;
mod move_ordering;
mod piece_square_tables;
mod search;

#[cfg(test)]
mod tests;

pub use evaluation::{count_doubled_pawns, evaluate, is_endgame};
pub use move_ordering::{generate_ordered_moves, order_moves};
pub use search::{choose_move, minimax, search, SearchResult, DEFAULT_DEPTH, INFINITY, MATE_SCORE};
