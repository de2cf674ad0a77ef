//! Benchmarks for move validation and legal move derivation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

use chess_rules::board::{Board, Color, Move};
use chess_rules::game::{derive_legal_moves, inspect, Game, GameConfig};

const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R";
const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";

fn position(fen: &str) -> Game {
    Game::from_board(Board::from_fen(fen), Color::White, GameConfig::default())
        .expect("benchmark position")
}

fn perft(game: &Game, depth: usize) -> usize {
    let moves = game.legal_moves().unwrap_or_default();
    if depth <= 1 {
        return moves.len();
    }
    moves
        .into_iter()
        .map(|mv| {
            let mut child = game.clone();
            child.play(mv);
            perft(&child, depth - 1)
        })
        .sum()
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");

    for (name, game) in [
        ("startpos", Game::new()),
        ("middlegame", position(MIDDLEGAME)),
        ("kiwipete", position(KIWIPETE)),
    ] {
        group.bench_function(name, |b| b.iter(|| black_box(game.legal_moves())));
    }

    group.finish();
}

fn bench_check_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("check");

    // Rook check along the e-file with a pinned blocker
    let board = Board::from_fen("4r2k/8/8/q7/8/8/3B4/4K3");
    group.bench_function("inspect", |b| {
        b.iter(|| black_box(inspect(&board, Color::White)))
    });

    let report = inspect(&board, Color::White).expect("king present");
    group.bench_function("derive_legal_moves", |b| {
        let mut board = board.clone();
        b.iter(|| {
            black_box(derive_legal_moves(
                &mut board,
                Color::White,
                &report,
                None,
                chess_rules::board::Piece::Queen,
            ))
        })
    });

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    let game = Game::new();

    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| perft(&game, black_box(depth)))
        });
    }

    group.finish();
}

fn bench_random_game(c: &mut Criterion) {
    c.bench_function("random_game_100_plies", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(7);
            let mut game = Game::new();
            for _ in 0..100 {
                let moves: Vec<Move> = game.legal_moves().unwrap_or_default();
                let Some(&mv) = moves.choose(&mut rng) else {
                    break;
                };
                black_box(game.play(mv));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_legal_moves,
    bench_check_derivation,
    bench_perft,
    bench_random_game
);
criterion_main!(benches);
