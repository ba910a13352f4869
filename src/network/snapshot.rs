use serde::{Deserialize, Serialize};

use super::{HostedGame, HostedStatus, Seat};
use crate::game_repr::{Board, CapturedPieces, CastlingRights, Color, GameStatus, MoveRecord, Square};

/// Everything a client needs to render a hosted game, sent after each change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub id: String,
    pub players: Vec<Seat>,
    pub board: Board,
    pub side_to_move: Color,
    pub status: HostedStatus,
    pub game_status: GameStatus,
    pub in_check: bool,
    pub captured: CapturedPieces,
    pub history: Vec<MoveRecord>,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
}

impl GameSnapshot {
    pub fn of(game: &HostedGame) -> Self {
        let state = game.state();
        let side = state.side_to_move();
        Self {
            id: game.id().to_string(),
            players: game.seats().to_vec(),
            board: *state.board(),
            side_to_move: side,
            status: game.status(),
            game_status: state.status(),
            in_check: state.is_in_check(side),
            captured: state.captured().clone(),
            history: state.history().to_vec(),
            castling: state.castling(),
            en_passant: state.en_passant(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Row of the open-games list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameListing {
    pub id: String,
    pub player_count: usize,
    pub status: HostedStatus,
}
