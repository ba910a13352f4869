//! Interactive game session and turn coordination.
//!
//! [`GameSession`] is the controller a front-end talks to. It owns one
//! [`GameState`] and the [`GameConfig`] it was started with, and manages:
//! - Selection and legal-destination queries for highlighting
//! - Move submission, promotion choice, undo and reset
//! - Game end detection after every completed move
//! - The computer's turn, searched on a worker while the session stays responsive
//!
//! # Example Flow
//!
//! ```text
//! [New session] -> [Human submits move] -> [Apply + check end]
//!   -> [Computer to move? spawn search, thinking = true]
//!   -> [poll_computer() lands the result] -> [Apply + check end] ...
//! ```
//!
//! While the computer is thinking, local moves and undo are refused with
//! [`SessionError::ComputerThinking`]. Reset abandons the search; its result
//! is never applied.

use std::sync::mpsc::{Receiver, TryRecvError};

use crate::agent::{spawn_search, GameResult, SearchResult};
use crate::config::{GameConfig, GameMode, PlayerConfig};
use crate::error::{MoveError, SessionError};
use crate::game_repr::{
    Color, GameState, GameStatus, Move, MoveList, MoveOutcome, MoveRecord, Position, Square, Type,
};

/// Search in flight for the computer side
struct PendingSearch {
    color: Color,
    receiver: Receiver<SearchResult>,
}

/// One game as seen by a local front-end.
pub struct GameSession {
    config: GameConfig,
    state: GameState,
    /// Position the game started from, restored by [`GameSession::reset`]
    start: Position,
    selected: Option<Square>,
    thinking: Option<PendingSearch>,
    game_result: Option<GameResult>,
}

impl GameSession {
    /// New game from the standard position
    pub fn new(config: GameConfig) -> Self {
        Self::with_position(config, Position::default())
    }

    /// New game from an arbitrary position, e.g. one parsed from FEN.
    /// If the computer is to move it starts thinking immediately.
    pub fn with_position(config: GameConfig, start: Position) -> Self {
        log::info!("Starting {:?} game", config.mode);

        let mut session = Self {
            config,
            state: GameState::from_position(start),
            start,
            selected: None,
            thinking: None,
            game_result: None,
        };
        session.after_move();
        session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move()
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Final result once the game has ended
    pub fn game_result(&self) -> Option<GameResult> {
        self.game_result
    }

    /// True while a computer search is outstanding
    pub fn is_thinking(&self) -> bool {
        self.thinking.is_some()
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Legal moves of whatever stands on `square` (for highlighting)
    pub fn legal_destinations(&self, square: Square) -> MoveList {
        self.state.legal_moves_from(square)
    }

    /// Selects a piece of the side to move and returns its legal moves
    pub fn select(&mut self, square: Square) -> Result<MoveList, SessionError> {
        self.ensure_local_turn()?;

        let piece = self
            .state
            .board()
            .get(square)
            .ok_or(MoveError::NoPieceAtSquare { square })?;
        if piece.color != self.state.side_to_move() {
            return Err(MoveError::WrongColor { square, color: piece.color }.into());
        }

        self.selected = Some(square);
        Ok(self.state.legal_moves_from(square))
    }

    /// Plays a move for a locally controlled side.
    ///
    /// Without `promotion`, a pawn reaching the last rank leaves the session
    /// waiting for [`GameSession::complete_promotion`].
    pub fn submit_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Type>,
    ) -> Result<MoveOutcome, SessionError> {
        self.ensure_local_turn()?;

        let outcome = self.state.apply_move(from, to, promotion)?;
        self.selected = None;
        if let MoveOutcome::Completed(_) = outcome {
            self.after_move();
        }
        Ok(outcome)
    }

    pub fn complete_promotion(&mut self, kind: Type) -> Result<MoveRecord, SessionError> {
        if self.thinking.is_some() {
            return Err(SessionError::ComputerThinking);
        }
        let record = self.state.complete_promotion(kind)?;
        self.after_move();
        Ok(record)
    }

    /// Applies the opponent's move in an online game.
    /// The move is validated by the same engine as local moves.
    pub fn receive_remote_move(&mut self, mv: Move) -> Result<MoveRecord, SessionError> {
        if self.game_result.is_some() {
            return Err(SessionError::GameOver);
        }
        if self.config.player(self.state.side_to_move()) != PlayerConfig::Remote {
            return Err(SessionError::NotYourTurn);
        }

        let record = self.apply_with_default_promotion(mv)?;
        self.after_move();
        Ok(record)
    }

    /// Takes back moves.
    ///
    /// Against the computer this undoes back to the human's turn (normally
    /// two plies). Returns the number of plies taken back.
    pub fn undo(&mut self) -> Result<usize, SessionError> {
        if self.thinking.is_some() {
            return Err(SessionError::ComputerThinking);
        }
        if self.config.mode == GameMode::Online {
            return Err(SessionError::UndoUnavailable);
        }

        let pending = self.state.pending_promotion().is_some();
        self.state.undo()?;
        let mut undone = 1;

        if !pending {
            if let Some(human) = self.config.human_color() {
                while self.state.side_to_move() != human && !self.state.history().is_empty() {
                    self.state.undo()?;
                    undone += 1;
                }
            }
        }

        log::debug!("Undid {} plies", undone);
        self.selected = None;
        self.game_result = None;
        self.after_move();
        Ok(undone)
    }

    /// Back to the starting position; an outstanding search is abandoned
    pub fn reset(&mut self) {
        if self.thinking.take().is_some() {
            log::debug!("Abandoning computer search on reset");
        }
        self.state = GameState::from_position(self.start);
        self.selected = None;
        self.game_result = None;
        self.after_move();
    }

    /// Non-blocking check for the computer's move; applies it if it has landed
    pub fn poll_computer(&mut self) -> Option<Move> {
        let pending = self.thinking.as_ref()?;
        match pending.receiver.try_recv() {
            Ok(result) => self.land_search(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                log::warn!("Computer search ended without a result");
                self.thinking = None;
                None
            }
        }
    }

    /// Blocks until the outstanding search finishes and applies its move
    pub fn wait_for_computer(&mut self) -> Option<Move> {
        let pending = self.thinking.as_ref()?;
        match pending.receiver.recv() {
            Ok(result) => self.land_search(result),
            Err(_) => {
                log::warn!("Computer search ended without a result");
                self.thinking = None;
                None
            }
        }
    }

    fn land_search(&mut self, result: SearchResult) -> Option<Move> {
        let pending = self.thinking.take()?;
        if pending.color != self.state.side_to_move() {
            log::warn!("Discarding stale search result for {}", pending.color);
            return None;
        }

        let mv = result.best_move?;
        match self.apply_with_default_promotion(mv) {
            Ok(_) => {
                self.after_move();
                Some(mv)
            }
            Err(err) => {
                log::warn!("Computer move {} rejected: {}", mv, err);
                None
            }
        }
    }

    /// Computer and remote moves never wait on a promotion choice
    fn apply_with_default_promotion(&mut self, mv: Move) -> Result<MoveRecord, MoveError> {
        match self.state.apply(mv)? {
            MoveOutcome::Completed(record) => Ok(record),
            MoveOutcome::PendingPromotion { .. } => self.state.complete_promotion(Type::Queen),
        }
    }

    fn ensure_local_turn(&self) -> Result<(), SessionError> {
        if self.thinking.is_some() {
            return Err(SessionError::ComputerThinking);
        }
        if self.game_result.is_some() {
            return Err(SessionError::GameOver);
        }
        if self.config.player(self.state.side_to_move()) != PlayerConfig::Human {
            return Err(SessionError::NotYourTurn);
        }
        Ok(())
    }

    /// Game end detection, then the computer's turn if it is due
    fn after_move(&mut self) {
        let status = self.state.status();
        if let Some(result) = GameResult::from_status(status) {
            log::info!("Game over: {:?}", result);
            self.game_result = Some(result);
            return;
        }

        let color = self.state.side_to_move();
        if let Some(depth) = self.config.computer_depth(color) {
            let (position, captured) = self.state.search_snapshot();
            log::debug!("Computer ({}) thinking at depth {}", color, depth);
            self.thinking = Some(PendingSearch {
                color,
                receiver: spawn_search(position, color, captured, depth),
            });
        }
    }
}
