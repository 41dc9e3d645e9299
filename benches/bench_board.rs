use criterion::{criterion_group, criterion_main, Criterion};
use wordgrid_validator::{Board, Dictionary, Placement};

const WORDS: &[&str] = &[
    "man", "mad", "an", "am", "ma", "zap", "rust", "rest", "test", "star", "tar", "at", "as",
    "sat", "rat", "art", "arts", "stars", "ta", "st",
];

const TEST_STATE: &str = "\
_______________
_______________
_______________
_______________
_______________
_______________
_______________
____RUST_______
_______E_______
_______STAR____
_______T_______
_______________
_______________
_______________
_______________";

fn test_board() -> Board {
    Board::from_text(TEST_STATE).unwrap()
}

fn bench_validate_move(c: &mut Criterion) {
    let board = test_board();
    let dictionary = Dictionary::from_words(WORDS);
    let accepted = [Placement::new(11, 9, 'S')];
    let rejected = [Placement::new(3, 10, 'A'), Placement::new(4, 11, 'T')];
    c.bench_function("board.validate_move.accepted", |b| {
        b.iter(|| board.validate_move(&accepted, &dictionary).unwrap())
    });
    c.bench_function("board.validate_move.rejected", |b| {
        b.iter(|| board.validate_move(&rejected, &dictionary).unwrap())
    });
}

fn bench_words(c: &mut Criterion) {
    let board = test_board();
    c.bench_function("board.words", |b| b.iter(|| board.words()));
}

fn bench_valid_moves(c: &mut Criterion, name: &str, rack: &[char]) {
    let board = test_board();
    let dictionary = Dictionary::from_words(WORDS);
    c.bench_function(&format!("board.valid_moves.{}", name), |b| {
        b.iter(|| board.valid_moves(rack, &dictionary).unwrap())
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_validate_move(c);
    bench_words(c);
    bench_valid_moves(c, "1", &['A', 'S']);
}

fn slow_benchmarks(c: &mut Criterion) {
    bench_valid_moves(c, "2", &['S', 'T', 'A', 'R']);
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(60);
    targets = criterion_benchmark
}

criterion_group! {
    name = slow;
    config = Criterion::default()
        .sample_size(10);
    targets = slow_benchmarks
}

criterion_main!(benches, slow);
