use super::*;

// ==================== PERFT: KIWIPETE ====================
// Castling both ways, en passant and pins in one position

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -";

#[test]
fn test_kiwipete_depth_1() {
    assert_eq!(fen(KIWIPETE).perft(1), 48);
}

#[test]
fn test_kiwipete_depth_2() {
    assert_eq!(fen(KIWIPETE).perft(2), 2039);
}

#[test]
fn test_kiwipete_castles_available() {
    let pos = fen(KIWIPETE);
    let moves = pos.legal_moves(sq("e1"));
    assert!(has_move(&moves, "e1", "g1"));
    assert!(has_move(&moves, "e1", "c1"));
}
