//! Benchmarks for gesture smoothing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gesture_catch::{
    gesture::{GestureLabel, Position, RawSample},
    smoother::{GestureSmoother, SlidingWindow},
};

/// Noisy classifier output cycling through every label
fn noisy_samples(count: usize) -> Vec<RawSample> {
    (0..count)
        .map(|i| {
            let label = GestureLabel::ALL[rand::random::<usize>() % GestureLabel::ALL.len()];
            if label == GestureLabel::None {
                RawSample::none()
            } else {
                let t = i as f64 * 0.05;
                RawSample::new(label, Position::new(0.5 + 0.3 * t.sin(), 0.5 + 0.3 * t.cos()))
            }
        })
        .collect()
}

fn benchmark_majority(c: &mut Criterion) {
    let mut group = c.benchmark_group("majority");

    for capacity in [4, 8, 16, 32] {
        let mut window = SlidingWindow::new(capacity);
        for sample in noisy_samples(capacity) {
            window.push(sample);
        }

        group.bench_with_input(BenchmarkId::new("capacity", capacity), &capacity, |b, _| {
            b.iter(|| black_box(window.majority()));
        });
    }

    group.finish();
}

fn benchmark_observe(c: &mut Criterion) {
    let mut group = c.benchmark_group("observe");
    let samples = noisy_samples(300);

    for capacity in [8, 32] {
        let mut smoother = GestureSmoother::new(capacity);

        group.bench_with_input(BenchmarkId::new("sequence_300", capacity), &samples, |b, data| {
            b.iter(|| {
                smoother.reset();
                for sample in data {
                    black_box(smoother.observe(black_box(*sample)));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_majority, benchmark_observe);
criterion_main!(benches);
