//! Error types for the rules engine and the controllers built on it.
//!
//! Rejected moves are expected, frequent outcomes; every variant here is an
//! ordinary value handed back to the caller, never a reason to panic.

use crate::game_repr::{Color, Square, Type};
use thiserror::Error;

/// Errors raised while applying or taking back moves
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Origin square is empty
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: Square },

    /// Piece on the origin square belongs to the side not on move
    #[error("Piece at square {square} belongs to {color}, not the side to move")]
    WrongColor { square: Square, color: Color },

    /// Destination is not in the legal set for that piece
    #[error("Illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// A pawn is waiting on the last rank for its promotion piece
    #[error("Promotion pending on {square}; choose a piece first")]
    PromotionPending { square: Square },

    #[error("No promotion is pending")]
    NoPendingPromotion,

    #[error("Cannot promote to {piece:?}")]
    InvalidPromotionPiece { piece: Type },

    #[error("No moves to undo")]
    EmptyHistory,
}

/// Errors raised while parsing FEN strings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("Empty FEN string")]
    Empty,

    #[error("Expected 8 ranks, found {0}")]
    RankCount(usize),

    #[error("Rank {0} does not describe exactly 8 squares")]
    RankLength(usize),

    #[error("Invalid piece character '{0}'")]
    InvalidPiece(char),

    #[error("Invalid side to move '{0}'")]
    InvalidSide(String),

    #[error("Invalid castling field '{0}'")]
    InvalidCastling(String),

    #[error("Invalid en passant square '{0}'")]
    InvalidEnPassant(String),
}

/// Errors raised by the interactive game session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A computer search is outstanding; local input is refused until it lands
    #[error("The computer is thinking")]
    ComputerThinking,

    #[error("It is not your turn")]
    NotYourTurn,

    #[error("The game is over")]
    GameOver,

    /// Online games cannot be taken back locally
    #[error("Undo is not available in online games")]
    UndoUnavailable,

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Errors raised by hosted (network-authoritative) games
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Game {0} not found")]
    GameNotFound(String),

    #[error("Game is full")]
    GameFull,

    #[error("Player {0} is not seated in this game")]
    NotAPlayer(String),

    #[error("Waiting for an opponent")]
    GameNotStarted,

    #[error("The game is over")]
    GameFinished,

    #[error("Not your turn")]
    NotYourTurn,

    #[error("Square ({row}, {col}) is off the board")]
    OffBoard { row: u8, col: u8 },

    /// Remote proposals must name the promotion piece up front
    #[error("Promotion piece required")]
    PromotionRequired,

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Result type alias for move operations
pub type MoveResult<T> = Result<T, MoveError>;
