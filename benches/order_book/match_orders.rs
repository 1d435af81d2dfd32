use criterion::{BenchmarkId, Criterion};
use matchbook_rs::{MatchingEngine, Side};
use rust_decimal::Decimal;
use std::hint::black_box;

/// Sets up an ask side with `levels` price levels of 10 units each.
fn setup_ask_book(levels: i64) -> MatchingEngine {
    let mut engine = MatchingEngine::new("BENCH_SYMBOL");
    for i in 0..levels {
        let _ = engine.add_limit_order(Side::Sell, Decimal::from(10_001 + i), 10);
    }
    engine
}

/// Register all benchmarks for matching against resting liquidity
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("MatchingEngine - Match Orders");

    // Sweep that consumes a growing number of levels
    for levels_consumed in [1i64, 10, 50].iter() {
        group.bench_with_input(
            BenchmarkId::new("market_buy_sweep", levels_consumed),
            levels_consumed,
            |b, &levels_consumed| {
                b.iter_batched(
                    || setup_ask_book(100),
                    |mut engine| {
                        black_box(engine.submit_market_order(Side::Buy, (levels_consumed * 10) as u64))
                    },
                    criterion::BatchSize::SmallInput,
                )
            },
        );
    }

    // Limit order that crosses part of the book and rests the remainder
    group.bench_function("limit_buy_partial_then_rest", |b| {
        b.iter_batched(
            || setup_ask_book(100),
            |mut engine| black_box(engine.add_limit_order(Side::Buy, Decimal::from(10_020), 500)),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}
