use super::*;

// ==================== STALEMATE TESTS ====================

#[test]
fn test_king_boxed_in_by_queen() {
    let mut pos = empty_board();
    place_piece(&mut pos, "a1", Color::White, Type::King);
    place_piece(&mut pos, "c2", Color::Black, Type::Queen);
    place_piece(&mut pos, "h8", Color::Black, Type::King);

    assert!(!pos.is_in_check(Color::White));
    assert!(pos.is_stalemate(Color::White));
    assert!(!pos.is_checkmate(Color::White));
}

#[test]
fn test_stalemate_status() {
    let state = GameState::from_position(fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1"));

    assert_eq!(state.status(), GameStatus::Stalemate);
    assert!(state.status().is_over());
}

#[test]
fn test_blocked_pawn_stalemate() {
    let pos = fen("k7/P7/1K6/8/8/8/8/8 b - - 0 1");
    assert!(pos.is_stalemate(Color::Black));
}

#[test]
fn test_spare_pawn_move_avoids_stalemate() {
    let mut pos = empty_board();
    place_piece(&mut pos, "a1", Color::White, Type::King);
    place_piece(&mut pos, "c2", Color::Black, Type::Queen);
    place_piece(&mut pos, "h8", Color::Black, Type::King);
    place_piece(&mut pos, "h4", Color::White, Type::Pawn);

    assert!(!pos.is_stalemate(Color::White));
    assert_eq!(pos.all_legal_moves(Color::White).len(), 1);
}

#[test]
fn test_starting_position_is_in_progress() {
    let state = GameState::new();
    assert_eq!(state.status(), GameStatus::InProgress { in_check: false });
    assert!(!state.is_stalemate(Color::White));
}
