use super::*;

// ==================== PERFT: STARTING POSITION ====================

#[test]
fn test_perft_depth_1() {
    assert_eq!(Position::default().perft(1), 20);
}

#[test]
fn test_perft_depth_2() {
    assert_eq!(Position::default().perft(2), 400);
}

#[test]
fn test_perft_depth_3() {
    assert_eq!(Position::default().perft(3), 8902);
}

#[test]
fn test_perft_leaves_position_untouched() {
    let pos = Position::default();
    pos.perft(2);
    assert_eq!(pos, Position::default());
}
