use super::piece_moves::king::KING_OFFSETS;
use super::piece_moves::knight::KNIGHT_OFFSETS;
use super::*;

/*
 * LEGALITY FILTER:
 * check detection and pruning of moves that leave the mover's king attacked
 */

impl Position {
    /// Checks if a square is attacked by any piece of `by_color`.
    ///
    /// Pawns attack diagonally only and kings never castle into an attack,
    /// so neither contributes its non-capturing moves here.
    pub fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        let mut destinations = Destinations::new();

        for (from, piece) in self.board.pieces_of(by_color) {
            let hit = match piece.piece_type {
                Type::Pawn => Self::pawn_attacks(from, by_color, square),
                Type::Knight => is_offset_of(from, square, &KNIGHT_OFFSETS),
                Type::King => is_offset_of(from, square, &KING_OFFSETS),
                Type::Bishop | Type::Rook | Type::Queen => {
                    destinations.clear();
                    self.pseudo_legal_moves_into(from, &mut destinations);
                    destinations.contains(&square)
                }
            };
            if hit {
                return true;
            }
        }
        false
    }

    /// Checks if the king of the given color is currently in check.
    /// A board without that king is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.board.king_square(color) {
            Some(king_sq) => self.is_square_attacked(king_sq, color.opposite()),
            None => false,
        }
    }

    /// Checks if a move is legal (doesn't leave the mover's king in check).
    /// Works on a throwaway copy; `self` is untouched.
    pub fn is_move_legal(&self, mv: Move) -> bool {
        let mut probe = *self;
        match probe.relocate(mv) {
            Some(record) => !probe.is_in_check(record.piece.color),
            None => false,
        }
    }

    /// Plain relocation of the piece on `from` to `to`, then a check test.
    /// Used for the squares a castling king crosses.
    pub(crate) fn step_is_safe(&self, from: Square, to: Square) -> bool {
        let mut probe = *self;
        let Some(piece) = probe.board.take(from) else {
            return false;
        };
        probe.board.place(to, piece);
        !probe.is_in_check(piece.color)
    }

    /// Keeps the candidates that do not leave `color`'s king attacked
    pub fn filter_legal(&self, color: Color, candidates: &[Move]) -> MoveList {
        candidates
            .iter()
            .copied()
            .filter(|&mv| {
                let mut probe = *self;
                probe.relocate(mv).is_some() && !probe.is_in_check(color)
            })
            .collect()
    }

    /// Legal moves of the piece on `from`, castling included.
    /// Pawn moves onto the last row carry a queen promotion hint.
    pub fn legal_moves_into(&self, from: Square, moves: &mut MoveList) {
        let Some(piece) = self.board.get(from) else {
            return;
        };

        let mut destinations = Destinations::new();
        self.pseudo_legal_moves_into(from, &mut destinations);
        if piece.piece_type == Type::King {
            self.castling_moves_into(from, piece.color, &mut destinations);
        }

        let promotes = piece.piece_type == Type::Pawn;
        let candidates: MoveList = destinations
            .into_iter()
            .map(|to| {
                if promotes && (to.row == 0 || to.row == 7) {
                    Move::with_promotion(from, to, Type::Queen)
                } else {
                    Move::new(from, to)
                }
            })
            .collect();
        moves.extend(self.filter_legal(piece.color, &candidates));
    }

    pub fn legal_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.legal_moves_into(from, &mut moves);
        moves
    }

    /// All legal moves for `color`, in row-major order of the moving piece
    pub fn all_legal_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (from, _) in self.board.pieces_of(color) {
            self.legal_moves_into(from, &mut moves);
        }
        moves
    }

    /// Checks if the given color has ANY legal moves available
    pub fn has_legal_moves(&self, color: Color) -> bool {
        let mut moves = MoveList::new();
        for (from, _) in self.board.pieces_of(color) {
            self.legal_moves_into(from, &mut moves);
            if !moves.is_empty() {
                return true;
            }
        }
        false
    }

    /// In check AND no legal moves
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_moves(color)
    }

    /// NOT in check AND no legal moves
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_moves(color)
    }

    /// Perft (Performance Test) - counts leaf nodes at a given depth for the side to move.
    /// Promotions count once per destination.
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.all_legal_moves(self.side_to_move);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        let mut pos = *self;
        for mv in moves {
            if let Some(record) = pos.make_move(mv) {
                nodes += pos.perft(depth - 1);
                pos.unmake_move(&record);
            }
        }
        nodes
    }
}

fn is_offset_of(from: Square, target: Square, offsets: &[(i8, i8)]) -> bool {
    offsets
        .iter()
        .any(|&(d_row, d_col)| from.offset(d_row, d_col) == Some(target))
}
