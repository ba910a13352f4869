use super::*;

// ==================== PERFT: ROOK AND PAWN ENDGAME ====================

const ENDGAME: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -";

#[test]
fn test_endgame_depth_1() {
    assert_eq!(fen(ENDGAME).perft(1), 14);
}

#[test]
fn test_endgame_depth_2() {
    assert_eq!(fen(ENDGAME).perft(2), 191);
}

#[test]
fn test_endgame_depth_3() {
    assert_eq!(fen(ENDGAME).perft(3), 2812);
}
