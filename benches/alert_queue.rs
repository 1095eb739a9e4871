// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the alert queue.
//!
//! Measures the performance of:
//! - Submitting bursts of distinct alerts
//! - Suppressing repeated alerts against a full history
//! - Draining a long queue with ticks

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::Duration;
use sync_alerts::alerts::{ActiveAlert, AlertQueue, ManualClock, Surface};

/// Surface that draws nothing.
struct NullSurface;

impl Surface for NullSurface {
    fn show(&mut self, active: &ActiveAlert) {
        black_box(active.text());
    }

    fn hide(&mut self) {}
}

fn bench_submit_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("alert_queue");

    group.bench_function("submit_100_distinct", |b| {
        b.iter(|| {
            let mut queue = AlertQueue::new(NullSurface, ManualClock::new());
            for n in 0..100 {
                let _ = queue.submit(format!("Syncing playlist {n}"), 5.0, false);
            }
            black_box(queue.pending_count());
        });
    });

    group.finish();
}

fn bench_suppress_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("alert_queue");

    let mut queue = AlertQueue::new(NullSurface, ManualClock::new());
    for n in 0..100 {
        let _ = queue.submit(format!("Syncing playlist {n}"), 5.0, false);
    }

    group.bench_function("suppress_against_100_recent", |b| {
        b.iter(|| {
            black_box(queue.submit("Syncing playlist 99", 5.0, false).ok());
        });
    });

    group.finish();
}

fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("alert_queue");

    group.bench_function("drain_100_with_ticks", |b| {
        b.iter(|| {
            let mut queue = AlertQueue::new(NullSurface, ManualClock::new());
            for n in 0..100 {
                let _ = queue.submit(format!("Syncing playlist {n}"), 0.5, false);
            }
            while !queue.is_idle() {
                queue.clock().advance(Duration::from_millis(100));
                queue.tick();
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_submit_burst,
    bench_suppress_duplicates,
    bench_drain
);
criterion_main!(benches);
