use criterion::Criterion;
use matchbook_rs::{MatchingEngine, Side};
use rust_decimal::Decimal;
use std::hint::black_box;

/// Register benchmarks that interleave writes and reads
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("MatchingEngine - Mixed Operations");

    group.bench_function("rest_cross_and_read", |b| {
        b.iter(|| {
            let mut engine = MatchingEngine::new("TEST-SYMBOL");
            for i in 0..50 {
                let _ = engine.add_limit_order(Side::Sell, Decimal::from(1000 + i), 5);
                let _ = engine.add_limit_order(Side::Buy, Decimal::from(990 - i), 5);
            }
            for i in 0..50 {
                let _ = engine.add_limit_order(Side::Buy, Decimal::from(1000 + i), 3);
                black_box(engine.best_ask());
                black_box(engine.get_book(20));
            }
            black_box(engine.get_trades(50));
        })
    });

    group.bench_function("cached_best_price_reads", |b| {
        let mut engine = MatchingEngine::new("TEST-SYMBOL");
        for i in 0..1000 {
            let _ = engine.add_limit_order(Side::Buy, Decimal::from(1000 + i), 5);
        }
        b.iter(|| black_box(engine.best_bid()))
    });

    group.bench_function("clear_all_data", |b| {
        b.iter_batched(
            || {
                let mut engine = MatchingEngine::new("TEST-SYMBOL");
                for i in 0..100 {
                    let _ = engine.add_limit_order(Side::Sell, Decimal::from(1000 + i), 5);
                }
                engine
            },
            |mut engine| black_box(engine.clear_all_data()),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}
