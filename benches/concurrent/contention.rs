use criterion::{BenchmarkId, Criterion};
use matchbook_rs::{MatchingEngine, SharedEngine, Side};
use rust_decimal::Decimal;
use std::hint::black_box;
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};

/// Register benchmarks that test different read/write ratios on a shared engine
pub fn register_contention_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("SharedEngine - Contention Patterns");

    for read_ratio in [0, 50, 95].iter() {
        // Fixed at 8 threads which is a common server core count
        let thread_count = 8;

        group.bench_with_input(
            BenchmarkId::new("read_write_ratio", read_ratio),
            read_ratio,
            |b, &read_ratio| {
                b.iter_custom(|iters| measure_read_write_contention(thread_count, iters, read_ratio));
            },
        );
    }

    group.finish();
}

fn seeded_engine() -> SharedEngine {
    let mut engine = MatchingEngine::new("TEST-SYMBOL");
    for i in 0..100 {
        let _ = engine.add_limit_order(Side::Buy, Decimal::from(900 + i), 1_000);
        let _ = engine.add_limit_order(Side::Sell, Decimal::from(1001 + i), 1_000);
    }
    SharedEngine::new(engine)
}

/// Measures time for operations with different read/write ratios
/// read_ratio = percentage of read operations (0-100)
fn measure_read_write_contention(thread_count: usize, iterations: u64, read_ratio: u64) -> Duration {
    let engine = seeded_engine();
    let barrier = Arc::new(Barrier::new(thread_count + 1));
    let per_thread = iterations.div_ceil(thread_count as u64);

    let handles: Vec<_> = (0..thread_count)
        .map(|thread_id| {
            let engine = engine.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..per_thread {
                    if (i * 100 / per_thread.max(1)) < read_ratio {
                        black_box(engine.get_book(10));
                    } else if (i + thread_id as u64) % 2 == 0 {
                        let _ = black_box(
                            engine.write(|e| e.add_limit_order(Side::Buy, Decimal::from(850), 1)),
                        );
                    } else {
                        let _ = black_box(engine.write(|e| e.submit_market_order(Side::Sell, 1)));
                    }
                }
            })
        })
        .collect();

    barrier.wait();
    let start = Instant::now();
    for handle in handles {
        let _ = handle.join();
    }
    start.elapsed()
}
