use super::*;
use serde::{Deserialize, Serialize};

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND MOVE EXECUTION
 */

/// 8x8 grid indexed `[row][col]`; row 0 is black's back rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self { squares: [[None; 8]; 8] }
    }

    /// Standard initial setup
    pub fn standard() -> Self {
        const BACK_RANK: [Type; 8] = [
            Type::Rook,
            Type::Knight,
            Type::Bishop,
            Type::Queen,
            Type::King,
            Type::Bishop,
            Type::Knight,
            Type::Rook,
        ];

        let mut board = Self::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            board.place(Square::new(0, col), Piece::new(Color::Black, kind));
            board.place(Square::new(1, col), Piece::new(Color::Black, Type::Pawn));
            board.place(Square::new(6, col), Piece::new(Color::White, Type::Pawn));
            board.place(Square::new(7, col), Piece::new(Color::White, kind));
        }
        board
    }

    /// `None` for empty squares and for squares off the board
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        *self.squares.get(sq.row as usize)?.get(sq.col as usize)?
    }

    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.row as usize][sq.col as usize] = piece;
    }

    pub fn place(&mut self, sq: Square, piece: Piece) {
        self.set(sq, Some(piece));
    }

    /// Empties a square, returning what stood there
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.row as usize][sq.col as usize].take()
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.squares
    }

    /// Occupied squares in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// First king of `color` in row-major order, if any
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, p)| p.piece_type == Type::King)
            .map(|(sq, _)| sq)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Swaps colors and mirrors rows, producing the same position seen from the other side
    pub fn flipped(&self) -> Self {
        let mut flipped = Self::empty();
        for (sq, piece) in self.pieces() {
            flipped.place(
                Square::new(7 - sq.row, sq.col),
                Piece::new(piece.color.opposite(), piece.piece_type),
            );
        }
        flipped
    }
}

/// Rule-relevant snapshot: grid plus side to move, castling rights and en-passant target.
/// Cheap to copy; search and legality checks work on owned copies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            board: Board::standard(),
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
        }
    }
}

impl Position {
    /// Wraps an arbitrary board with no castling rights and no en-passant target
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            castling: CastlingRights::none(),
            en_passant: None,
        }
    }

    /// Moves pieces and updates rights and en-passant state without passing the turn.
    ///
    /// A pawn reaching the last row is replaced only when `mv.promotion` is set.
    /// Returns `None` if `mv.from` is empty. No legality checking happens here.
    pub(crate) fn relocate(&mut self, mv: Move) -> Option<MoveRecord> {
        let piece = self.board.get(mv.from)?;
        let color = piece.color;

        let prior_en_passant = self.en_passant;
        let prior_castling = self.castling;

        let mut captured = self.board.get(mv.to);
        let mut was_en_passant = false;

        // En passant: the victim stands one rank behind the destination
        if piece.piece_type == Type::Pawn && Some(mv.to) == self.en_passant && captured.is_none() {
            if let Some(victim_sq) = mv.to.offset(-color.forward(), 0) {
                captured = self.board.take(victim_sq);
                was_en_passant = true;
            }
        }

        self.en_passant = None;
        if piece.piece_type == Type::Pawn && mv.from.row.abs_diff(mv.to.row) == 2 {
            self.en_passant = Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col));
        }

        if piece.piece_type == Type::King && mv.from.col.abs_diff(mv.to.col) == 2 {
            let row = mv.from.row;
            let (rook_from, rook_to) = if mv.to.col > mv.from.col { (7, 5) } else { (0, 3) };
            let rook = self.board.take(Square::new(row, rook_from));
            self.board.set(Square::new(row, rook_to), rook);
        }

        match piece.piece_type {
            Type::King => self.castling.revoke_all(color),
            Type::Rook => self.revoke_side(color, mv.from.col),
            _ => {}
        }
        // A rook taken on its home corner can never castle again
        if let Some(victim) = captured.filter(|p| p.piece_type == Type::Rook) {
            if mv.to.row == victim.color.home_row() {
                self.revoke_side(victim.color, mv.to.col);
            }
        }

        self.board.set(mv.from, None);
        self.board.place(mv.to, piece);

        let mut promotion = None;
        if piece.piece_type == Type::Pawn && (mv.to.row == 0 || mv.to.row == 7) {
            if let Some(kind) = mv.promotion {
                self.board.place(mv.to, Piece::new(color, kind));
                promotion = Some(kind);
            }
        }

        Some(MoveRecord {
            from: mv.from,
            to: mv.to,
            piece,
            captured,
            was_en_passant,
            prior_en_passant,
            prior_castling,
            promotion,
        })
    }

    fn revoke_side(&mut self, color: Color, col: u8) {
        match col {
            0 => self.castling.side_mut(color).queenside = false,
            7 => self.castling.side_mut(color).kingside = false,
            _ => {}
        }
    }

    /// Plays a move and passes the turn
    pub fn make_move(&mut self, mv: Move) -> Option<MoveRecord> {
        let record = self.relocate(mv)?;
        self.side_to_move = record.piece.color.opposite();
        Some(record)
    }

    /// Returns a copy with `mv` played, leaving `self` untouched
    pub fn after(&self, mv: Move) -> Option<Position> {
        let mut next = *self;
        next.make_move(mv)?;
        Some(next)
    }

    /// Exact inverse of [`Position::make_move`] / [`Position::relocate`]
    pub fn unmake_move(&mut self, record: &MoveRecord) {
        self.board.set(record.to, None);
        self.board.place(record.from, record.piece);

        if record.was_en_passant {
            if let Some(victim_sq) = record.to.offset(-record.piece.color.forward(), 0) {
                self.board.set(victim_sq, record.captured);
            }
        } else {
            self.board.set(record.to, record.captured);
        }

        if record.is_castling() {
            let row = record.from.row;
            let (rook_home, rook_castled) = if record.to.col > record.from.col { (7, 5) } else { (0, 3) };
            let rook = self.board.take(Square::new(row, rook_castled));
            self.board.set(Square::new(row, rook_home), rook);
        }

        self.en_passant = record.prior_en_passant;
        self.castling = record.prior_castling;
        self.side_to_move = record.piece.color;
    }
}
