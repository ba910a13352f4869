use super::*;

// ==================== EN PASSANT TESTS ====================

fn en_passant_setup() -> Position {
    let mut pos = empty_board();
    place_piece(&mut pos, "e5", Color::White, Type::Pawn);
    place_piece(&mut pos, "d7", Color::Black, Type::Pawn);
    pos.side_to_move = Color::Black;
    pos
}

#[test]
fn test_en_passant_available_after_double_push() {
    let mut pos = en_passant_setup();
    play(&mut pos, "d7d5");

    let moves = pos.legal_moves(sq("e5"));
    assert!(has_move(&moves, "e5", "d6"), "White should be able to capture en passant");
}

#[test]
fn test_en_passant_removes_victim() {
    let mut pos = en_passant_setup();
    play(&mut pos, "d7d5");
    let record = play(&mut pos, "e5d6");

    assert!(record.was_en_passant);
    assert_eq!(record.captured, Some(Piece::new(Color::Black, Type::Pawn)));
    assert!(pos.board.is_empty(sq("d5")), "Captured pawn must leave the board");
    assert_eq!(pos.board.get(sq("d6")), Some(Piece::new(Color::White, Type::Pawn)));
}

#[test]
fn test_en_passant_expires_after_one_move() {
    let mut pos = en_passant_setup();
    place_piece(&mut pos, "h2", Color::White, Type::Pawn);
    place_piece(&mut pos, "a7", Color::Black, Type::Pawn);

    play(&mut pos, "d7d5");
    play(&mut pos, "h2h3");
    play(&mut pos, "a7a6");

    let moves = pos.legal_moves(sq("e5"));
    assert!(!has_move(&moves, "e5", "d6"), "The right lapses once another move is played");
}

#[test]
fn test_no_en_passant_after_single_steps() {
    let mut pos = en_passant_setup();
    play(&mut pos, "d7d6");
    assert_eq!(pos.en_passant, None);
}

#[test]
fn test_black_en_passant() {
    let mut pos = empty_board();
    place_piece(&mut pos, "d4", Color::Black, Type::Pawn);
    place_piece(&mut pos, "e2", Color::White, Type::Pawn);
    play(&mut pos, "e2e4");
    assert_eq!(pos.en_passant, Some(sq("e3")));

    let moves = pos.legal_moves(sq("d4"));
    assert!(has_move(&moves, "d4", "e3"));

    play(&mut pos, "d4e3");
    assert!(pos.board.is_empty(sq("e4")));
}

#[test]
fn test_en_passant_only_for_adjacent_pawns() {
    let mut pos = en_passant_setup();
    place_piece(&mut pos, "g5", Color::White, Type::Pawn);
    play(&mut pos, "d7d5");

    let moves = pos.legal_moves(sq("g5"));
    assert!(!has_move(&moves, "g5", "d6"));
    assert_eq!(moves.len(), 1);
}

#[test]
fn test_en_passant_exposing_king_is_illegal() {
    // Both pawns leave the fifth rank, opening it for the rook
    let mut pos = empty_board();
    place_piece(&mut pos, "a5", Color::White, Type::King);
    place_piece(&mut pos, "e5", Color::White, Type::Pawn);
    place_piece(&mut pos, "d7", Color::Black, Type::Pawn);
    place_piece(&mut pos, "h5", Color::Black, Type::Rook);
    pos.side_to_move = Color::Black;
    play(&mut pos, "d7d5");

    let moves = pos.legal_moves(sq("e5"));
    assert!(!has_move(&moves, "e5", "d6"), "Capture would expose the king along the rank");
}

#[test]
fn test_en_passant_undo_restores_victim() {
    let mut pos = en_passant_setup();
    play(&mut pos, "d7d5");
    let before = pos;

    let record = play(&mut pos, "e5d6");
    pos.unmake_move(&record);

    assert_eq!(pos, before);
    assert_eq!(pos.board.get(sq("d5")), Some(Piece::new(Color::Black, Type::Pawn)));
}
