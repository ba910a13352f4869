//! Player trait and associated types for chess game agents.
//!
//! A player is anything that can be asked for a move for the side to move:
//! the built-in computer opponent, a scripted replay, a remote seat. Each
//! implementation provides its own constructor; the trait only covers
//! behaviour.
//!
//! # Synchronous Design
//!
//! `get_move()` is blocking. The interactive session does not call it on
//! its own thread for the computer side; it hands the search to a worker
//! (see [`crate::agent::spawn_search`]) and polls for the result.

use crate::game_repr::{Color, GameState, GameStatus, Move};

/// Result of a completed chess game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Black was checkmated
    WhiteWins,
    /// White was checkmated
    BlackWins,
    /// Side to move has no legal moves but is not in check
    Stalemate,
}

impl GameResult {
    /// Create a GameResult from the winning color
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    /// `None` while the game is still in progress
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::InProgress { .. } => None,
            GameStatus::Checkmate { winner } => Some(Self::from_winner(winner)),
            GameStatus::Stalemate => Some(GameResult::Stalemate),
        }
    }
}

/// Trait for entities that can provide chess moves.
///
/// Only `get_move()` must be implemented.
pub trait Player {
    /// Request the next move for the side to move in `state`.
    ///
    /// Returns `None` if the player has no move to offer (no legal moves,
    /// resignation, disconnection). The caller validates the move; a
    /// promotion move should name its piece.
    fn get_move(&mut self, state: &GameState) -> Option<Move>;

    /// Called after the opponent's move has been applied
    fn opponent_moved(&mut self, _mv: Move) {}

    /// Called once when the game reaches a terminal state
    fn game_ended(&mut self, _result: GameResult) {}

    fn name(&self) -> &str {
        "Player"
    }
}
