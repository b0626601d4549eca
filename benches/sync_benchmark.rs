/*!
 * Synchronization Primitives Benchmarks
 *
 * Latch hand-off latency and seeded generator throughput
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use proxy_test_common::{OneShotLatch, SeededRandomSource};
use std::sync::Arc;
use std::thread;

fn bench_signal_then_wait(c: &mut Criterion) {
    let latch = OneShotLatch::new();

    // Uncontended: the flag is already armed when the wait runs
    c.bench_function("latch_signal_then_wait", |b| {
        b.iter(|| {
            latch.signal();
            latch.wait_until_signaled();
        });
    });
}

fn bench_ping_pong(c: &mut Criterion) {
    let mut group = c.benchmark_group("latch_ping_pong");

    for rounds in [10u64, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(rounds), &rounds, |b, &rounds| {
            b.iter(|| {
                let ping = Arc::new(OneShotLatch::new());
                let pong = Arc::new(OneShotLatch::new());

                let (ping_clone, pong_clone) = (ping.clone(), pong.clone());
                let handle = thread::spawn(move || {
                    for _ in 0..rounds {
                        ping_clone.wait_until_signaled();
                        pong_clone.signal();
                    }
                });

                for _ in 0..rounds {
                    ping.signal();
                    pong.wait_until_signaled();
                }

                handle.join().unwrap();
            });
        });
    }

    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let mut source = SeededRandomSource::with_seed(1);

    c.bench_function("seeded_random_next", |b| {
        b.iter(|| black_box(source.random()));
    });
}

criterion_group!(benches, bench_signal_then_wait, bench_ping_pong, bench_random);
criterion_main!(benches);
