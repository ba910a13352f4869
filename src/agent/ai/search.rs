// Fixed-depth minimax search with alpha-beta pruning
//
// The root tries every legal move in capture-first order and scores each
// child with a fresh full window. Below the root the usual alpha-beta
// window is threaded through. Scores are always from the root color's
// point of view: maximizing nodes belong to the root color, minimizing
// nodes to its opponent.

use crate::game_repr::{CapturedPieces, Color, Move, Position};
use super::evaluation::evaluate;
use super::move_ordering::generate_ordered_moves;
use std::time::Instant;

/// Score of a mated side, from the root's perspective
pub const MATE_SCORE: i32 = 100_000;

/// Bound wider than any reachable score
pub const INFINITY: i32 = 1_000_000;

/// Plies searched when nothing else is configured
pub const DEFAULT_DEPTH: u8 = 4;

/// Result of a search operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u8,
    pub nodes_searched: u64,
    pub time_ms: u64,
}

/// Best move for `color`, or `None` if it has no legal move.
///
/// `captured` is the game's captured-pieces snapshot; it is fed to every
/// evaluation unchanged.
pub fn choose_move(pos: &Position, color: Color, captured: &CapturedPieces, depth: u8) -> Option<Move> {
    search(pos, color, captured, depth).best_move
}

/// Runs the search and reports statistics along with the move.
/// A depth of 0 is treated as 1.
pub fn search(pos: &Position, color: Color, captured: &CapturedPieces, depth: u8) -> SearchResult {
    let start_time = Instant::now();
    let depth = depth.max(1);
    let mut nodes = 0u64;

    let mut result = SearchResult {
        depth,
        score: -INFINITY,
        ..SearchResult::default()
    };

    for mov in generate_ordered_moves(pos, color) {
        let mut child = *pos;
        if child.make_move(mov).is_none() {
            continue;
        }
        nodes += 1;

        let score = minimax(&child, depth - 1, -INFINITY, INFINITY, false, color, captured, &mut nodes);

        // Strict comparison: the first of equally scored moves wins
        if score > result.score {
            result.score = score;
            result.best_move = Some(mov);
        }
    }

    if result.best_move.is_none() {
        result.score = 0;
    }
    result.nodes_searched = nodes;
    result.time_ms = start_time.elapsed().as_millis() as u64;

    log::debug!(
        "search depth {} score {} nodes {} time {}ms best {:?}",
        result.depth,
        result.score,
        result.nodes_searched,
        result.time_ms,
        result.best_move.map(|m| m.to_string())
    );

    result
}

/// Minimax value of `pos` for `root`.
///
/// The side to move here is `root` when `maximizing`, its opponent otherwise.
/// A side without legal moves scores -MATE_SCORE (maximizing) or +MATE_SCORE
/// (minimizing) when in check, 0 when stalemated.
#[allow(clippy::too_many_arguments)]
pub fn minimax(
    pos: &Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    root: Color,
    captured: &CapturedPieces,
    nodes: &mut u64,
) -> i32 {
    if depth == 0 {
        return evaluate(pos, root, captured);
    }

    let side = if maximizing { root } else { root.opposite() };
    let moves = generate_ordered_moves(pos, side);

    if moves.is_empty() {
        if pos.is_in_check(side) {
            return if maximizing { -MATE_SCORE } else { MATE_SCORE };
        }
        return 0;
    }

    if maximizing {
        let mut max_eval = -INFINITY;
        for mov in moves {
            let mut child = *pos;
            if child.make_move(mov).is_none() {
                continue;
            }
            *nodes += 1;

            let eval = minimax(&child, depth - 1, alpha, beta, false, root, captured, nodes);
            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = INFINITY;
        for mov in moves {
            let mut child = *pos;
            if child.make_move(mov).is_none() {
                continue;
            }
            *nodes += 1;

            let eval = minimax(&child, depth - 1, alpha, beta, true, root, captured, nodes);
            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
