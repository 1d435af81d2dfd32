// demos/src/bin/shared_engine.rs

use matchbook_rs::{MatchingEngine, SharedEngine, Side, setup_logger};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread;
use std::time::Duration;
use tracing::info;

const MAKER_THREADS: usize = 4;
const TAKER_THREADS: usize = 4;
const READER_THREADS: usize = 2;

fn main() {
    setup_logger();
    info!("Shared Engine Example");

    let engine = SharedEngine::new(MatchingEngine::new("ETH/USD"));
    let running = Arc::new(AtomicBool::new(true));
    let placed = Arc::new(AtomicU64::new(0));
    let filled = Arc::new(AtomicU64::new(0));
    let reads = Arc::new(AtomicU64::new(0));

    let mut handles = Vec::new();

    for maker in 0..MAKER_THREADS {
        let engine = engine.clone();
        let running = Arc::clone(&running);
        let placed = Arc::clone(&placed);
        handles.push(thread::spawn(move || {
            let side = if maker % 2 == 0 { Side::Buy } else { Side::Sell };
            let mut step = 0i64;
            while running.load(Ordering::Relaxed) {
                let offset = Decimal::from(1 + step % 10);
                let price = match side {
                    Side::Buy => Decimal::from(2000) - offset,
                    Side::Sell => Decimal::from(2000) + offset,
                };
                if engine.write(|e| e.add_limit_order(side, price, 5)).is_ok() {
                    placed.fetch_add(5, Ordering::Relaxed);
                }
                step += 1;
            }
        }));
    }

    for taker in 0..TAKER_THREADS {
        let engine = engine.clone();
        let running = Arc::clone(&running);
        let filled = Arc::clone(&filled);
        handles.push(thread::spawn(move || {
            let side = if taker % 2 == 0 { Side::Buy } else { Side::Sell };
            while running.load(Ordering::Relaxed) {
                if let Ok(result) = engine.write(|e| e.submit_market_order(side, 3)) {
                    filled.fetch_add(result.filled_quantity, Ordering::Relaxed);
                }
            }
        }));
    }

    for _ in 0..READER_THREADS {
        let engine = engine.clone();
        let running = Arc::clone(&running);
        let reads = Arc::clone(&reads);
        handles.push(thread::spawn(move || {
            while running.load(Ordering::Relaxed) {
                let book = engine.get_book(5);
                if let (Some(bid), Some(ask)) = (book.best_bid(), book.best_ask()) {
                    assert!(bid.price < ask.price, "crossed book observed");
                }
                reads.fetch_add(1, Ordering::Relaxed);
            }
        }));
    }

    thread::sleep(Duration::from_millis(500));
    running.store(false, Ordering::Relaxed);
    for handle in handles {
        let _ = handle.join();
    }

    let snapshot = engine.snapshot();
    info!("Placed quantity:  {}", placed.load(Ordering::Relaxed));
    info!("Filled quantity:  {}", filled.load(Ordering::Relaxed));
    info!("Book reads:       {}", reads.load(Ordering::Relaxed));
    info!("Trades recorded:  {}", engine.read(|e| e.trade_count()));
    info!(
        "Top of book: bid {:?} / ask {:?} (spread {:?})",
        snapshot.best_bid, snapshot.best_ask, snapshot.spread
    );
}
