use super::*;
use crate::error::{MoveError, MoveResult};
use serde::{Deserialize, Serialize};

/// Pieces removed from the board, per owning color, in capture order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    pub white: Vec<Piece>,
    pub black: Vec<Piece>,
}

impl CapturedPieces {
    pub fn of(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn list_mut(&mut self, color: Color) -> &mut Vec<Piece> {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    pub fn push(&mut self, piece: Piece) {
        self.list_mut(piece.color).push(piece);
    }

    pub fn pop(&mut self, color: Color) -> Option<Piece> {
        self.list_mut(color).pop()
    }

    pub fn is_empty(&self) -> bool {
        self.white.is_empty() && self.black.is_empty()
    }
}

/// What happened to an accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Move finished and the turn passed
    Completed(MoveRecord),
    /// A pawn stands on the last rank; call [`GameState::complete_promotion`]
    PendingPromotion { square: Square, color: Color },
}

/// Status of the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress { in_check: bool },
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingPromotion {
    record: MoveRecord,
}

/// Authoritative state of one game: position, captured pieces and history.
///
/// Mutated only through [`GameState::apply_move`], [`GameState::complete_promotion`]
/// and [`GameState::undo`]; illegal input leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    position: Position,
    captured: CapturedPieces,
    history: Vec<MoveRecord>,
    pending: Option<PendingPromotion>,
}

impl GameState {
    /// Standard initial position, full castling rights, empty history
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn board(&self) -> &Board {
        &self.position.board
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    pub fn castling(&self) -> CastlingRights {
        self.position.castling
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.position.en_passant
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Square and color of a pawn waiting for its promotion piece
    pub fn pending_promotion(&self) -> Option<(Square, Color)> {
        self.pending
            .map(|p| (p.record.to, p.record.piece.color))
    }

    pub fn legal_moves(&self, color: Color) -> MoveList {
        self.position.all_legal_moves(color)
    }

    /// Legal moves of the piece on `from`; empty while a promotion is pending
    pub fn legal_moves_from(&self, from: Square) -> MoveList {
        if self.pending.is_some() {
            return MoveList::new();
        }
        self.position.legal_moves(from)
    }

    /// Validates and plays a move for the side to move.
    ///
    /// A pawn reaching the last rank without `promotion` leaves the game in a
    /// pending state: the turn does not pass until [`GameState::complete_promotion`].
    pub fn apply_move(&mut self, from: Square, to: Square, promotion: Option<Type>) -> MoveResult<MoveOutcome> {
        if let Some(pending) = self.pending {
            return Err(MoveError::PromotionPending { square: pending.record.to });
        }

        let piece = self
            .position
            .board
            .get(from)
            .ok_or(MoveError::NoPieceAtSquare { square: from })?;
        if piece.color != self.position.side_to_move {
            return Err(MoveError::WrongColor { square: from, color: piece.color });
        }
        if let Some(kind) = promotion {
            if !kind.is_promotion_target() {
                return Err(MoveError::InvalidPromotionPiece { piece: kind });
            }
        }

        let is_legal = self
            .position
            .legal_moves(from)
            .iter()
            .any(|m| m.to == to);
        if !is_legal {
            return Err(MoveError::IllegalMove { from, to });
        }

        let reaches_last_row = piece.piece_type == Type::Pawn && (to.row == 0 || to.row == 7);
        let mv = Move {
            from,
            to,
            promotion: if reaches_last_row { promotion } else { None },
        };

        let record = self
            .position
            .relocate(mv)
            .ok_or(MoveError::NoPieceAtSquare { square: from })?;
        if let Some(captured) = record.captured {
            self.captured.push(captured);
        }

        if reaches_last_row && record.promotion.is_none() {
            log::debug!("{} pawn on {} awaits promotion", piece.color, to);
            self.pending = Some(PendingPromotion { record });
            return Ok(MoveOutcome::PendingPromotion { square: to, color: piece.color });
        }

        self.finish(record);
        Ok(MoveOutcome::Completed(record))
    }

    /// Applies a move value, e.g. one produced by the search
    pub fn apply(&mut self, mv: Move) -> MoveResult<MoveOutcome> {
        self.apply_move(mv.from, mv.to, mv.promotion)
    }

    /// Replaces the waiting pawn with `kind` and passes the turn
    pub fn complete_promotion(&mut self, kind: Type) -> MoveResult<MoveRecord> {
        let pending = self.pending.ok_or(MoveError::NoPendingPromotion)?;
        if !kind.is_promotion_target() {
            return Err(MoveError::InvalidPromotionPiece { piece: kind });
        }
        self.pending = None;

        let mut record = pending.record;
        record.promotion = Some(kind);
        self.position
            .board
            .place(record.to, Piece::new(record.piece.color, kind));

        self.finish(record);
        Ok(record)
    }

    fn finish(&mut self, record: MoveRecord) {
        log::debug!("{} plays {}", record.piece.color, record.as_move());
        self.history.push(record);
        self.position.side_to_move = record.piece.color.opposite();
    }

    /// Takes back the last move, or the half-made move of a pending promotion
    pub fn undo(&mut self) -> MoveResult<MoveRecord> {
        let record = match self.pending.take() {
            Some(pending) => pending.record,
            None => self.history.pop().ok_or(MoveError::EmptyHistory)?,
        };

        self.position.unmake_move(&record);
        if let Some(captured) = record.captured {
            self.captured.pop(captured.color);
        }
        Ok(record)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.position.is_in_check(color)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.position.is_checkmate(color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        self.position.is_stalemate(color)
    }

    /// Status of the side about to move
    pub fn status(&self) -> GameStatus {
        let color = self.position.side_to_move;
        let in_check = self.position.is_in_check(color);
        if self.position.has_legal_moves(color) {
            GameStatus::InProgress { in_check }
        } else if in_check {
            GameStatus::Checkmate { winner: color.opposite() }
        } else {
            GameStatus::Stalemate
        }
    }

    /// Owned copy of what the search needs
    pub fn search_snapshot(&self) -> (Position, CapturedPieces) {
        (self.position, self.captured.clone())
    }
}
