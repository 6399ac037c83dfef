//! Criterion benchmarks measure time of the clearly separated pieces of code.

use std::hint::black_box;

use captures::capture::{capturable, Defenders};
use captures::chess::attacks::moves_for;
use captures::chess::core::{Piece, PieceKind, Square};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const INPUTS: [&str; 8] = [
    "pawn a5", "rook d4", "ROOK H8", "Pawn e4", "bishop c1", "rook i1", "pawn a9", "rook a1 extra",
];

fn parse(c: &mut Criterion) {
    let _ = c.bench_function("parse pieces", |b| {
        b.iter(|| {
            for input in INPUTS {
                let _ = black_box(Piece::parse(black_box(input)));
            }
        });
    });
}

fn generate_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("moves for every square");
    for kind in [PieceKind::Pawn, PieceKind::Rook] {
        let _ = group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, kind| {
            b.iter(|| {
                for square in Square::iter() {
                    let _ = black_box(moves_for(*kind, black_box(square)));
                }
            });
        });
    }
    group.finish();
}

fn find_captures(c: &mut Criterion) {
    let mut defenders = Defenders::default();
    for square in Square::iter().step_by(4) {
        defenders
            .insert(Piece::new(PieceKind::Pawn, square))
            .expect("defenders are unique");
    }
    let attacker = Piece::new(PieceKind::Rook, Square::D4);
    let _ = c.bench_function("capturable by rook", |b| {
        b.iter(|| black_box(capturable(black_box(attacker), &defenders)));
    });
}

criterion_group! {
    name = captures;
    config = Criterion::default();
    targets = parse, generate_moves, find_captures
}
criterion_main!(captures);
