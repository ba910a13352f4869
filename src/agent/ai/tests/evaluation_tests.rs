// Tests for the static evaluation

use crate::agent::ai::evaluation::{count_doubled_pawns, evaluate, is_endgame};
use crate::game_repr::{CapturedPieces, Color, Piece, Position, Type};

fn fen(s: &str) -> Position {
    Position::from_fen(s).unwrap()
}

fn no_captures() -> CapturedPieces {
    CapturedPieces::default()
}

#[test]
fn test_starting_position_balanced() {
    let score = evaluate(&Position::default(), Color::White, &no_captures());
    assert_eq!(score, 0, "Starting position is perfectly symmetric");
}

#[test]
fn test_perspective_flip() {
    let pos = fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq -");
    let captured = no_captures();

    assert_eq!(evaluate(&pos, Color::White, &captured), -evaluate(&pos, Color::Black, &captured));
}

#[test]
fn test_material_queen_advantage() {
    let pos = fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -");
    let score = evaluate(&pos, Color::White, &no_captures());

    assert!(score > 850, "Extra queen should give large advantage: {}", score);
}

#[test]
fn test_captured_pieces_are_counted_again() {
    let pos = Position::default();
    let mut captured = no_captures();
    captured.push(Piece::new(Color::Black, Type::Knight));

    assert_eq!(evaluate(&pos, Color::White, &captured), 320);

    captured.push(Piece::new(Color::White, Type::Rook));
    assert_eq!(evaluate(&pos, Color::White, &captured), 320 - 500);
    assert_eq!(evaluate(&pos, Color::Black, &captured), 500 - 320);
}

#[test]
fn test_piece_square_tables_matter() {
    let captured = no_captures();
    let center = evaluate(&fen("4k3/8/8/4N3/8/8/8/4K3 w - -"), Color::White, &captured);
    let edge = evaluate(&fen("4k3/8/8/N7/8/8/8/4K3 w - -"), Color::White, &captured);

    assert!(center > edge, "Central knight should be valued higher");
}

#[test]
fn test_doubled_pawn_counts() {
    assert_eq!(count_doubled_pawns(&Position::default(), Color::White), 0);

    let two = fen("4k3/8/8/8/4P3/4P3/8/4K3 w - -");
    assert_eq!(count_doubled_pawns(&two, Color::White), 1);
    assert_eq!(count_doubled_pawns(&two, Color::Black), 0);

    let three = fen("4k3/8/8/4P3/4P3/4P3/8/4K3 w - -");
    assert_eq!(count_doubled_pawns(&three, Color::White), 2);

    let two_files = fen("4k3/pp6/pp6/8/8/8/8/4K3 w - -");
    assert_eq!(count_doubled_pawns(&two_files, Color::Black), 2);
}

#[test]
fn test_doubled_pawns_penalised() {
    let captured = no_captures();
    // Same pawns and squares apart from the file of one of them
    let doubled = evaluate(&fen("4k3/8/8/8/8/3P4/3P4/4K3 w - -"), Color::White, &captured);
    let healthy = evaluate(&fen("4k3/8/8/8/8/3P4/2P5/4K3 w - -"), Color::White, &captured);

    assert!(healthy > doubled);
}

#[test]
fn test_endgame_detection() {
    assert!(!is_endgame(&Position::default()));
    assert!(is_endgame(&fen("4k3/8/8/8/8/8/8/4K3 w - -")), "Bare kings");
    assert!(
        is_endgame(&fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBNR w KQkq -")),
        "No queens left"
    );
}

#[test]
fn test_bare_kings_score() {
    let captured = no_captures();
    assert_eq!(evaluate(&fen("4k3/8/8/8/8/8/8/4K3 w - -"), Color::White, &captured), 0);

    // Cornered black king: 30 from the endgame table, 2 * (5 - 3) from mobility
    assert_eq!(evaluate(&fen("k7/8/8/8/8/8/8/4K3 w - -"), Color::White, &captured), 34);
}
