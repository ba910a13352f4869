use chess_duel::agent::ai::search;
use chess_duel::game_repr::{CapturedPieces, Color, Position};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const MIDDLEGAME: &str = "r1bqk2r/pp2bppp/2n1pn2/2pp4/3P4/2N1PN2/PPP1BPPP/R1BQK2R w KQkq -";

fn bench_search_start(c: &mut Criterion) {
    let pos = Position::default();
    let captured = CapturedPieces::default();
    c.bench_function("search start depth 3", |b| {
        b.iter(|| black_box(search(&pos, Color::White, &captured, 3)))
    });
}

fn bench_search_middlegame(c: &mut Criterion) {
    let Ok(pos) = Position::from_fen(MIDDLEGAME) else {
        return;
    };
    let captured = CapturedPieces::default();
    let mut group = c.benchmark_group("search middlegame");
    group.sample_size(10);
    group.bench_function("depth 3", |b| b.iter(|| black_box(search(&pos, Color::White, &captured, 3))));
    group.finish();
}

criterion_group!(benches, bench_search_start, bench_search_middlegame);
criterion_main!(benches);
