//! Benchmarks for movingstats windows
//!
//! Run with: cargo bench --features full

// Require all features for benchmarks
#[cfg(not(all(feature = "extremum", feature = "average", feature = "summary")))]
compile_error!("Benchmarks require all features. Run: cargo bench --features full");

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use movingstats::average::{MovingAverage, MovingAverageDeviation};
use movingstats::buffer::RingBuffer;
use movingstats::extremum::{MovingMax, MovingMin};
use movingstats::summary::MovingSummary;
use movingstats::traits::Window;

const CAPACITIES: [usize; 3] = [16, 1024, 65536];

/// Pseudo-random but cheap sample stream
fn sample(i: u64) -> i64 {
    (i.wrapping_mul(0x9e3779b97f4a7c15) >> 40) as i64 - (1 << 23)
}

// ============================================================================
// Ring Buffer Benchmarks
// ============================================================================

fn bench_ring_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_buffer");
    group.throughput(Throughput::Elements(1));

    for capacity in CAPACITIES {
        group.bench_function(format!("push_cap{}", capacity), |b| {
            let mut ring = RingBuffer::new(capacity);
            let mut i = 0u64;
            b.iter(|| {
                black_box(ring.push(i));
                i = i.wrapping_add(1);
            });
        });
    }

    group.bench_function("iterate_cap1024", |b| {
        let mut ring = RingBuffer::new(1024);
        ring.extend(0..5000u64);
        b.iter(|| black_box(ring.iter().sum::<u64>()));
    });

    group.finish();
}

// ============================================================================
// Moving Max / Min Benchmarks
// ============================================================================

fn bench_extremum(c: &mut Criterion) {
    let mut group = c.benchmark_group("extremum");
    group.throughput(Throughput::Elements(1));

    for capacity in CAPACITIES {
        group.bench_function(format!("max_add_cap{}", capacity), |b| {
            let mut max = MovingMax::new(capacity);
            let mut i = 0u64;
            b.iter(|| {
                max.add_sample(sample(i));
                i = i.wrapping_add(1);
            });
        });

        group.bench_function(format!("min_add_cap{}", capacity), |b| {
            let mut min = MovingMin::new(capacity);
            let mut i = 0u64;
            b.iter(|| {
                min.add_sample(sample(i));
                i = i.wrapping_add(1);
            });
        });
    }

    // Strictly decreasing input is the worst case for the max deque size
    group.bench_function("max_add_decreasing_cap1024", |b| {
        let mut max = MovingMax::new(1024);
        let mut i = i64::MAX;
        b.iter(|| {
            max.add_sample(i);
            i -= 1;
        });
    });

    group.bench_function("max_query", |b| {
        let mut max = MovingMax::new(1024);
        max.extend((0..10_000u64).map(sample));
        b.iter(|| black_box(max.max()));
    });

    group.finish();
}

// ============================================================================
// Moving Average Benchmarks
// ============================================================================

fn bench_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("average");
    group.throughput(Throughput::Elements(1));

    for capacity in CAPACITIES {
        group.bench_function(format!("add_cap{}", capacity), |b| {
            let mut avg = MovingAverage::<i64, i64>::new(capacity);
            let mut i = 0u64;
            b.iter(|| {
                avg.add_sample(sample(i));
                i = i.wrapping_add(1);
            });
        });
    }

    group.bench_function("mean_query", |b| {
        let mut avg = MovingAverage::<i64, i64>::new(1024);
        avg.extend((0..10_000u64).map(sample));
        b.iter(|| {
            black_box(avg.mean::<f64>().unwrap());
            black_box(avg.mean::<i64>().unwrap());
        });
    });

    group.finish();
}

// ============================================================================
// Moving Average Deviation Benchmarks
// ============================================================================

fn bench_deviation(c: &mut Criterion) {
    let mut group = c.benchmark_group("deviation");
    group.throughput(Throughput::Elements(1));

    for capacity in CAPACITIES {
        group.bench_function(format!("add_cap{}", capacity), |b| {
            let mut dev = MovingAverageDeviation::<f64, f64>::new(capacity);
            let mut i = 0u64;
            b.iter(|| {
                dev.add_sample(sample(i) as f64);
                i = i.wrapping_add(1);
            });
        });
    }

    group.bench_function("add_duration_cap1024", |b| {
        let mut dev = MovingAverageDeviation::<Duration, Duration>::new(1024);
        let mut i = 0u64;
        b.iter(|| {
            dev.add_sample(Duration::from_micros(i % 20_000));
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("query_all", |b| {
        let mut dev = MovingAverageDeviation::<f64, f64>::new(1024);
        dev.extend((0..10_000u64).map(|i| sample(i) as f64));
        b.iter(|| {
            black_box(dev.mean::<f64>().unwrap());
            black_box(dev.deviation::<f64>().unwrap());
        });
    });

    group.finish();
}

// ============================================================================
// Moving Summary Benchmarks
// ============================================================================

fn bench_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary");
    group.throughput(Throughput::Elements(1));

    for capacity in CAPACITIES {
        group.bench_function(format!("add_cap{}", capacity), |b| {
            let mut summary = MovingSummary::<i64, i64>::new(capacity);
            let mut i = 0u64;
            b.iter(|| {
                summary.add_sample(sample(i));
                i = i.wrapping_add(1);
            });
        });
    }

    group.finish();
}

// ============================================================================
// Main
// ============================================================================

criterion_group!(
    benches,
    bench_ring_buffer,
    bench_extremum,
    bench_average,
    bench_deviation,
    bench_summary,
);

criterion_main!(benches);
