use serde::{Deserialize, Serialize};

use super::GameSnapshot;
use crate::error::NetworkError;
use crate::game_repr::{Color, GameState, Move, MoveOutcome, MoveRecord, Square, Type};

/// Lifecycle of a hosted game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostedStatus {
    /// One seat taken
    Waiting,
    Playing,
    /// Checkmate or stalemate reached
    Finished,
}

/// A participant; seats are never freed, only marked disconnected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: String,
    pub name: String,
    pub color: Color,
    pub connected: bool,
}

/// A move as sent by a remote client, in board coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveProposal {
    pub from_row: u8,
    pub from_col: u8,
    pub to_row: u8,
    pub to_col: u8,
    #[serde(default)]
    pub promotion_piece: Option<Type>,
}

impl MoveProposal {
    pub fn new(from: Square, to: Square, promotion_piece: Option<Type>) -> Self {
        Self {
            from_row: from.row,
            from_col: from.col,
            to_row: to.row,
            to_col: to.col,
            promotion_piece,
        }
    }

    /// Checks coordinates are on the board
    pub fn to_move(&self) -> Result<Move, NetworkError> {
        let square = |row: u8, col: u8| {
            if row < 8 && col < 8 {
                Ok(Square::new(row, col))
            } else {
                Err(NetworkError::OffBoard { row, col })
            }
        };
        Ok(Move {
            from: square(self.from_row, self.from_col)?,
            to: square(self.to_row, self.to_col)?,
            promotion: self.promotion_piece,
        })
    }
}

/// One server-side game: two seats around a [`GameState`].
#[derive(Debug, Clone)]
pub struct HostedGame {
    id: String,
    seats: Vec<Seat>,
    state: GameState,
    status: HostedStatus,
}

impl HostedGame {
    pub fn new(id: String) -> Self {
        Self {
            id,
            seats: Vec::with_capacity(2),
            state: GameState::new(),
            status: HostedStatus::Waiting,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn status(&self) -> HostedStatus {
        self.status
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn connected_count(&self) -> usize {
        self.seats.iter().filter(|s| s.connected).count()
    }

    /// First player gets white, second black; the second join starts the game
    pub fn add_player(&mut self, player_id: &str, name: &str) -> Result<Color, NetworkError> {
        let color = match self.seats.len() {
            0 => Color::White,
            1 => Color::Black,
            _ => return Err(NetworkError::GameFull),
        };

        self.seats.push(Seat {
            id: player_id.to_string(),
            name: name.to_string(),
            color,
            connected: true,
        });
        log::info!("{} joined game {} as {}", name, self.id, color);

        if self.seats.len() == 2 {
            self.status = HostedStatus::Playing;
        }
        Ok(color)
    }

    /// Marks the player's seat disconnected; returns false if they had none
    pub fn remove_player(&mut self, player_id: &str) -> bool {
        match self.seats.iter_mut().find(|s| s.id == player_id) {
            Some(seat) => {
                seat.connected = false;
                log::info!("{} left game {}", seat.name, self.id);
                true
            }
            None => false,
        }
    }

    pub fn player_color(&self, player_id: &str) -> Option<Color> {
        self.seats.iter().find(|s| s.id == player_id).map(|s| s.color)
    }

    /// Validates and applies a remote proposal.
    ///
    /// The proposer must hold the seat of the side to move and the move must
    /// be in the legal set recomputed here. A legal promotion must name its
    /// piece.
    pub fn make_move(&mut self, player_id: &str, proposal: MoveProposal) -> Result<MoveRecord, NetworkError> {
        let result = self.try_move(player_id, proposal);
        if let Err(err) = &result {
            log::warn!("Game {}: rejected {:?} from {}: {}", self.id, proposal, player_id, err);
        }
        result
    }

    fn try_move(&mut self, player_id: &str, proposal: MoveProposal) -> Result<MoveRecord, NetworkError> {
        match self.status {
            HostedStatus::Waiting => return Err(NetworkError::GameNotStarted),
            HostedStatus::Finished => return Err(NetworkError::GameFinished),
            HostedStatus::Playing => {}
        }

        let color = self
            .player_color(player_id)
            .ok_or_else(|| NetworkError::NotAPlayer(player_id.to_string()))?;
        if color != self.state.side_to_move() {
            return Err(NetworkError::NotYourTurn);
        }

        let mv = proposal.to_move()?;
        let record = match self.state.apply(mv)? {
            MoveOutcome::Completed(record) => record,
            // A remote move cannot be left pending; take back the half-made move
            MoveOutcome::PendingPromotion { .. } => {
                self.state.undo()?;
                return Err(NetworkError::PromotionRequired);
            }
        };

        let status = self.state.status();
        if status.is_over() {
            log::info!("Game {} finished: {:?}", self.id, status);
            self.status = HostedStatus::Finished;
        }
        Ok(record)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoveError;

    fn sq(name: &str) -> Square {
        Square::parse(name).unwrap()
    }

    fn proposal(from: &str, to: &str) -> MoveProposal {
        MoveProposal::new(sq(from), sq(to), None)
    }

    fn full_game() -> HostedGame {
        let mut game = HostedGame::new("abcd1234".to_string());
        game.add_player("p1", "Alice").unwrap();
        game.add_player("p2", "Bob").unwrap();
        game
    }

    #[test]
    fn test_seats_and_status() {
        let mut game = HostedGame::new("g".to_string());
        assert_eq!(game.add_player("p1", "Alice"), Ok(Color::White));
        assert_eq!(game.status(), HostedStatus::Waiting);
        assert_eq!(game.add_player("p2", "Bob"), Ok(Color::Black));
        assert_eq!(game.status(), HostedStatus::Playing);
        assert_eq!(game.add_player("p3", "Carol"), Err(NetworkError::GameFull));
    }

    #[test]
    fn test_move_before_opponent_joins() {
        let mut game = HostedGame::new("g".to_string());
        game.add_player("p1", "Alice").unwrap();
        assert_eq!(game.make_move("p1", proposal("e2", "e4")), Err(NetworkError::GameNotStarted));
    }

    #[test]
    fn test_turn_enforcement() {
        let mut game = full_game();
        assert_eq!(game.make_move("p2", proposal("e7", "e5")), Err(NetworkError::NotYourTurn));
        assert_eq!(
            game.make_move("stranger", proposal("e2", "e4")),
            Err(NetworkError::NotAPlayer("stranger".to_string()))
        );

        game.make_move("p1", proposal("e2", "e4")).unwrap();
        game.make_move("p2", proposal("e7", "e5")).unwrap();
        assert_eq!(game.state().history().len(), 2);
    }

    #[test]
    fn test_illegal_proposals_rejected() {
        let mut game = full_game();
        assert_eq!(
            game.make_move("p1", proposal("e2", "e5")),
            Err(NetworkError::Move(MoveError::IllegalMove { from: sq("e2"), to: sq("e5") }))
        );

        let off_board = MoveProposal { from_row: 6, from_col: 4, to_row: 9, to_col: 4, promotion_piece: None };
        assert_eq!(game.make_move("p1", off_board), Err(NetworkError::OffBoard { row: 9, col: 4 }));
        assert!(game.state().history().is_empty());
    }

    #[test]
    fn test_move_leaving_king_in_check_rejected() {
        let mut game = full_game();
        for (player, from, to) in [("p1", "e2", "e4"), ("p2", "e7", "e5"), ("p1", "d1", "h5"), ("p2", "b8", "c6")] {
            game.make_move(player, proposal(from, to)).unwrap();
        }
        // Qxf7+ must be answered
        game.make_move("p1", proposal("h5", "f7")).unwrap();
        assert!(game.make_move("p2", proposal("a7", "a6")).is_err());
        assert!(game.make_move("p2", proposal("e8", "f7")).is_ok());
    }

    #[test]
    fn test_checkmate_finishes_game() {
        let mut game = full_game();
        for (player, from, to) in [("p1", "f2", "f3"), ("p2", "e7", "e5"), ("p1", "g2", "g4"), ("p2", "d8", "h4")] {
            game.make_move(player, proposal(from, to)).unwrap();
        }
        assert_eq!(game.status(), HostedStatus::Finished);
        assert_eq!(game.make_move("p1", proposal("a2", "a3")), Err(NetworkError::GameFinished));
    }

    #[test]
    fn test_promotion_piece_asked_only_for_legal_moves() {
        let mut game = full_game();
        for (player, from, to) in [
            ("p1", "a2", "a4"),
            ("p2", "b7", "b5"),
            ("p1", "a4", "b5"),
            ("p2", "a7", "a6"),
            ("p1", "b5", "a6"),
            ("p2", "c8", "b7"),
            ("p1", "a6", "b7"),
            ("p2", "g8", "f6"),
        ] {
            game.make_move(player, proposal(from, to)).unwrap();
        }

        // b8 holds the black knight
        assert_eq!(
            game.make_move("p1", proposal("b7", "b8")),
            Err(NetworkError::Move(MoveError::IllegalMove { from: sq("b7"), to: sq("b8") }))
        );
        assert_eq!(game.make_move("p1", proposal("b7", "a8")), Err(NetworkError::PromotionRequired));
        assert_eq!(game.state().history().len(), 8);
        assert_eq!(game.state().side_to_move(), Color::White);
        assert!(game.state().pending_promotion().is_none());

        let promote = MoveProposal::new(sq("b7"), sq("a8"), Some(Type::Queen));
        let record = game.make_move("p1", promote).unwrap();
        assert_eq!(record.promotion, Some(Type::Queen));
    }

    #[test]
    fn test_disconnect_marks_seat() {
        let mut game = full_game();
        assert!(game.remove_player("p2"));
        assert!(!game.remove_player("nobody"));
        assert_eq!(game.connected_count(), 1);
        assert_eq!(game.seats().len(), 2);
    }
}
