//! Benchmarks for trajectory integration.
//!
//! Run with: `cargo bench`

use aizawa::{integrate, AizawaParams, DEFAULT_INITIAL_STATE, DEFAULT_STEPS};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_integrate(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrate");
    let params = AizawaParams::default();

    for steps in [1_000, 10_000, DEFAULT_STEPS] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter(|| {
                black_box(
                    integrate(
                        black_box(&params),
                        DEFAULT_INITIAL_STATE,
                        steps,
                        0.01,
                    )
                    .unwrap(),
                )
            })
        });
    }

    group.finish();
}

fn bench_playback_tick(c: &mut Criterion) {
    use aizawa::{Playback, DEFAULT_TRAIL_LEN};
    use std::sync::Arc;

    let traj = Arc::new(integrate(&AizawaParams::default(), DEFAULT_INITIAL_STATE, DEFAULT_STEPS, 0.01).unwrap());
    let mut playback = Playback::new(traj);

    c.bench_function("playback_tick", |b| {
        b.iter(|| {
            playback.advance(black_box(1.0 / 60.0));
            black_box(playback.current_position());
            black_box(playback.trail(DEFAULT_TRAIL_LEN));
        })
    });
}

criterion_group!(benches, bench_integrate, bench_playback_tick);
criterion_main!(benches);
