//! The built-in computer opponent.
//!
//! [`ComputerPlayer`] is the blocking [`Player`] used for self-play and
//! tests. [`spawn_search`] runs the same search on the `rayon` pool and
//! delivers the result over a channel, so an interactive caller can keep
//! handling input while the computer thinks.

use std::sync::mpsc::{self, Receiver};

use crate::agent::ai::{search, SearchResult};
use crate::agent::player::{GameResult, Player};
use crate::config::Difficulty;
use crate::game_repr::{CapturedPieces, Color, GameState, Move, Position};

/// Minimax player searching a fixed number of plies
pub struct ComputerPlayer {
    depth: u8,
    name: String,
}

impl ComputerPlayer {
    pub fn new(depth: u8, name: String) -> Self {
        Self { depth, name }
    }

    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.max_depth(), format!("Computer ({})", difficulty.name()))
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl Player for ComputerPlayer {
    fn get_move(&mut self, state: &GameState) -> Option<Move> {
        let (position, captured) = state.search_snapshot();
        let color = position.side_to_move;
        let result = search(&position, color, &captured, self.depth);

        log::debug!(
            "[{}] depth {} searched {} nodes in {}ms",
            self.name,
            result.depth,
            result.nodes_searched,
            result.time_ms
        );
        result.best_move
    }

    fn game_ended(&mut self, result: GameResult) {
        log::debug!("[{}] game over: {:?}", self.name, result);
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Search `position` for `color` on the rayon pool.
///
/// The snapshot is owned by the task; the receiver yields exactly one
/// result unless the receiver is dropped first, in which case the result is
/// discarded.
pub fn spawn_search(
    position: Position,
    color: Color,
    captured: CapturedPieces,
    depth: u8,
) -> Receiver<SearchResult> {
    let (tx, rx) = mpsc::channel();
    rayon::spawn(move || {
        let result = search(&position, color, &captured, depth);
        // The session may have been reset or dropped meanwhile
        let _ = tx.send(result);
    });
    rx
}
