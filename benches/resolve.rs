//! Benchmarks for the engine's hot paths: detection, the availability
//! scan, and a full cascade.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use rust_match3::board::Board;
use rust_match3::core::{BoardConfig, BoardRng};
use rust_match3::resolve::CascadeResolver;
use rust_match3::rules::{detect, find_first_move, has_available_move};

/// An 8x8 board with one producing swap already applied, plus the RNG
/// state that follows its generation.
fn unsettled_board() -> (Board, BoardRng) {
    for seed in 0.. {
        let config = BoardConfig::new(8, 8, 4).with_seed(seed);
        let mut rng = BoardRng::new(seed);
        let mut board = Board::generate(&config, &mut rng);
        if let Some(found) = find_first_move(&board) {
            board.swap(found.a, found.b).unwrap();
            return (board, rng);
        }
    }
    unreachable!("an 8x8 4-kind board with a producing swap exists");
}

fn bench_detect(c: &mut Criterion) {
    let config = BoardConfig::new(8, 8, 6);
    let board = Board::generate(&config, &mut BoardRng::new(42));

    c.bench_function("detect_settled_8x8", |b| {
        b.iter(|| detect(black_box(&board)))
    });
}

fn bench_availability(c: &mut Criterion) {
    let config = BoardConfig::new(8, 8, 6);
    let board = Board::generate(&config, &mut BoardRng::new(42));

    c.bench_function("has_available_move_8x8", |b| {
        b.iter(|| has_available_move(black_box(&board)))
    });
}

fn bench_resolve(c: &mut Criterion) {
    let (board, rng) = unsettled_board();

    c.bench_function("resolve_cascade_8x8", |b| {
        b.iter_batched(
            || (board.clone(), rng.clone()),
            |(mut board, mut rng)| CascadeResolver::resolve(&mut board, &mut rng),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_detect, bench_availability, bench_resolve);
criterion_main!(benches);
