// Tests for capture-first move ordering

use crate::agent::ai::move_ordering::{generate_ordered_moves, order_moves};
use crate::game_repr::{Color, Move, Position, Square};

fn sq(name: &str) -> Square {
    Square::parse(name).unwrap()
}

#[test]
fn test_quiet_position_keeps_generation_order() {
    let pos = Position::default();
    let ordered = generate_ordered_moves(&pos, Color::White);
    let generated = pos.all_legal_moves(Color::White);

    assert_eq!(ordered.len(), 20);
    assert_eq!(ordered, generated, "No captures means the stable sort changes nothing");
}

#[test]
fn test_most_valuable_victim_first() {
    // Knight on d5 can take the queen on c7 or the rook on e7; pawn g4 can take a pawn on f5
    let pos = Position::from_fen("4k3/2q1r3/8/3N1p2/6P1/8/8/K7 w - -").unwrap();
    let ordered = generate_ordered_moves(&pos, Color::White);

    assert_eq!(ordered[0], Move::new(sq("d5"), sq("c7")), "Queen capture leads");
    assert_eq!(ordered[1], Move::new(sq("d5"), sq("e7")), "Rook capture follows");
    assert_eq!(ordered[2], Move::new(sq("g4"), sq("f5")), "Pawn capture before quiet moves");
}

#[test]
fn test_equal_captures_keep_relative_order() {
    // Both knight captures hit pawns; the first one listed stays first
    let pos = Position::from_fen("4k3/8/2p1p3/8/3N4/8/8/4K3 w - -").unwrap();
    let mut moves = vec![
        Move::new(sq("d4"), sq("f3")),
        Move::new(sq("d4"), sq("e6")),
        Move::new(sq("d4"), sq("c6")),
    ];
    order_moves(&pos, &mut moves);
    assert_eq!(
        moves,
        vec![
            Move::new(sq("d4"), sq("e6")),
            Move::new(sq("d4"), sq("c6")),
            Move::new(sq("d4"), sq("f3")),
        ]
    );
}

#[test]
fn test_ordering_preserves_move_set() {
    let pos = Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -").unwrap();
    let mut ordered = generate_ordered_moves(&pos, Color::White).to_vec();
    let mut generated = pos.all_legal_moves(Color::White).to_vec();

    ordered.sort_by_key(|m| (m.from, m.to));
    generated.sort_by_key(|m| (m.from, m.to));
    assert_eq!(ordered, generated);
}
