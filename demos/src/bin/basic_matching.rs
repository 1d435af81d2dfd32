// demos/src/bin/basic_matching.rs

use matchbook_rs::{
    EngineConfig, MatchingEngine, OrderRequest, Side, SubmitResult, setup_logger,
};
use rust_decimal::Decimal;
use tracing::{error, info};

fn main() {
    // Set up logging
    setup_logger();
    info!("Basic Matching Engine Example");

    let mut engine = match create_engine("BTC/USD") {
        Ok(engine) => engine,
        Err(err) => {
            error!("Failed to create engine: {}", err);
            return;
        }
    };

    // Build a two-sided book
    demo_resting_orders(&mut engine);
    display_book_state(&engine);

    // Cross the spread with limit and market orders
    demo_limit_order_matching(&mut engine);
    demo_market_orders(&mut engine);

    // Raw payloads, including rejected ones
    demo_raw_requests(&mut engine);

    // Administrative resets
    demo_clear_operations(&mut engine);

    info!("\nFinal Book State:");
    display_book_state(&engine);
}

fn create_engine(symbol: &str) -> Result<MatchingEngine, matchbook_rs::OrderBookError> {
    info!("Creating engine for symbol: {}", symbol);
    let config = EngineConfig {
        default_depth: 10,
        max_trade_log: Some(10_000),
        ..EngineConfig::with_symbol(symbol)
    };
    MatchingEngine::with_config(config)
}

fn demo_resting_orders(engine: &mut MatchingEngine) {
    info!("\nResting orders...");

    for i in 0..5 {
        let price = Decimal::from(9900 + i * 20); // 9900, 9920, 9940, 9960, 9980
        let quantity = 10 + (i as u64) * 5; // 10, 15, 20, 25, 30
        log_result("BUY limit", engine.add_limit_order(Side::Buy, price, quantity));
    }

    for i in 0..5 {
        let price = Decimal::from(10000 + i * 20); // 10000, 10020, 10040, 10060, 10080
        let quantity = 10 + (i as u64) * 5;
        log_result("SELL limit", engine.add_limit_order(Side::Sell, price, quantity));
    }
}

fn demo_limit_order_matching(engine: &mut MatchingEngine) {
    info!("\nAggressive limit buy at 10030 for 20...");
    log_result(
        "BUY limit",
        engine.add_limit_order(Side::Buy, Decimal::from(10030), 20),
    );
    display_book_state(engine);
}

fn demo_market_orders(engine: &mut MatchingEngine) {
    info!("\nMarket sell for 40...");
    log_result("SELL market", engine.submit_market_order(Side::Sell, 40));

    info!("Market buy for 1000 (more than the ask side holds)...");
    log_result("BUY market", engine.submit_market_order(Side::Buy, 1000));
}

fn demo_raw_requests(engine: &mut MatchingEngine) {
    info!("\nSubmitting raw JSON payloads...");
    let payloads = [
        r#"{"side": "sell", "price": "10100.50", "quantity": 7}"#,
        r#"{"side": "buy", "type": "limit", "price": 9990, "quantity": 3}"#,
        r#"{"side": "buy", "price": 9990, "quantity": 1.5}"#,
        r#"{"side": "hold", "price": 9990, "quantity": 1}"#,
        r#"{"side": "sell", "type": "limit", "quantity": 1}"#,
    ];

    for payload in payloads {
        match serde_json::from_str::<OrderRequest>(payload) {
            Ok(request) => log_result("raw", engine.submit(&request)),
            Err(err) => error!("Malformed payload {}: {}", payload, err),
        }
    }
}

fn demo_clear_operations(engine: &mut MatchingEngine) {
    info!("\nClearing the most recent trade...");
    match engine.clear_trade(0) {
        Ok(snapshot) => info!("{} trades remain", snapshot.trades.len()),
        Err(err) => info!("Nothing cleared: {}", err),
    }

    info!("Clearing bid level 9990...");
    match engine.clear_bid_order(Decimal::from(9990)) {
        Ok(snapshot) => info!("Best bid is now {:?}", snapshot.best_bid),
        Err(err) => info!("Nothing cleared: {}", err),
    }

    info!("Clearing a level that does not exist...");
    if let Err(err) = engine.clear_ask_order(Decimal::from(1)) {
        info!("Expected failure: {}", err);
    }
}

fn log_result(label: &str, result: Result<SubmitResult, matchbook_rs::OrderBookError>) {
    match result {
        Ok(result) => {
            info!(
                "{} {}: {:?}, {} trades, filled={}, rested={}, unfilled={}",
                label,
                result.order,
                result.status(),
                result.trades.len(),
                result.filled_quantity,
                result.rested_quantity,
                result.unfilled_quantity
            );
            for trade in &result.trades {
                info!("  trade #{}: {} @ {}", trade.sequence, trade.quantity, trade.price);
            }
        }
        Err(err) => info!("{} rejected: {}", label, err),
    }
}

fn display_book_state(engine: &MatchingEngine) {
    let snapshot = engine.snapshot();

    info!("Book for {}:", snapshot.book.symbol);
    for level in snapshot.book.asks.iter().rev() {
        info!("  ASK {:>10} x {}", level.price, level.quantity);
    }
    info!("  ---- spread {:?} ----", snapshot.spread);
    for level in &snapshot.book.bids {
        info!("  BID {:>10} x {}", level.price, level.quantity);
    }
    info!("Last price: {}", snapshot.book.last_price);
    if let Some(stats) = engine.trade_stats(50) {
        info!(
            "Recent trades: {} (open {}, high {}, low {}, last {}, volume {})",
            stats.count, stats.open, stats.high, stats.low, stats.last, stats.volume
        );
    }
    if let Ok(json) = snapshot.book.to_json() {
        info!("JSON: {}", json);
    }
}
