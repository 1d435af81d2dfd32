use criterion::{BenchmarkId, Criterion};
use matchbook_rs::{MatchingEngine, OrderRequest, Side};
use rust_decimal::Decimal;
use std::hint::black_box;

/// Register all benchmarks for resting orders in the book
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("MatchingEngine - Add Orders");

    // Distinct levels, nothing crosses
    group.bench_function("add_limit_orders_distinct_levels", |b| {
        b.iter(|| {
            let mut engine = MatchingEngine::new("TEST-SYMBOL");
            for i in 0..100 {
                let _ = black_box(engine.add_limit_order(Side::Buy, Decimal::from(1000 + i), 10));
            }
        })
    });

    // Every order merges into the same level
    group.bench_function("add_limit_orders_same_level", |b| {
        b.iter(|| {
            let mut engine = MatchingEngine::new("TEST-SYMBOL");
            for _ in 0..100 {
                let _ = black_box(engine.add_limit_order(Side::Sell, Decimal::from(1000), 10));
            }
        })
    });

    // Including validation of the raw payload
    group.bench_function("submit_raw_requests", |b| {
        let request = OrderRequest::limit("buy", Decimal::new(99_950, 2), Decimal::from(3));
        b.iter(|| {
            let mut engine = MatchingEngine::new("TEST-SYMBOL");
            for _ in 0..100 {
                let _ = black_box(engine.submit(&request));
            }
        })
    });

    for depth in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("add_order_to_deep_book", depth),
            depth,
            |b, &depth| {
                let mut engine = MatchingEngine::new("TEST-SYMBOL");
                for i in 0..depth {
                    let _ = engine.add_limit_order(Side::Buy, Decimal::from(1000 + i), 10);
                }
                b.iter(|| {
                    let _ = black_box(engine.add_limit_order(Side::Buy, Decimal::from(500), 1));
                })
            },
        );
    }

    group.finish();
}
