use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cycle_snake::board::Board;
use cycle_snake::cycle::build_cycle;
use cycle_snake::pilot::{drive, CyclePilot, Pilot};
use cycle_snake::types::TickInstruments;
use std::time::Duration;

#[derive(Debug)]
struct Instruments {}

impl TickInstruments for Instruments {
    fn observe_tick(&self, _: Duration) {}
}

fn bench_build_cycle(c: &mut Criterion) {
    c.bench_function("build cycle 18x17", |b| {
        b.iter(|| build_cycle(black_box(18), black_box(17)).unwrap())
    });
}

fn bench_decide(c: &mut Criterion) {
    let board = Board::new(18, 17, 3).unwrap();
    c.bench_function("decide on a fresh 18x17 board", |b| {
        b.iter(|| {
            let mut pilot = CyclePilot::new();
            black_box(pilot.decide(black_box(&board)))
        })
    });
}

fn bench_small_full_game(c: &mut Criterion) {
    c.bench_function("autopilot game on 4x2", |b| {
        b.iter(|| {
            let mut board = Board::new(4, 2, 7).unwrap();
            let mut pilot = CyclePilot::new();
            drive(&mut board, &mut pilot, &Instruments {}, black_box(10_000)).ok()
        })
    });
}

criterion_group!(
    benches,
    bench_build_cycle,
    bench_decide,
    bench_small_full_game
);
criterion_main!(benches);
