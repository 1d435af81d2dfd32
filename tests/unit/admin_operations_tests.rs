//! Administrative clear operations through the public and shared APIs.

#[cfg(test)]
mod admin_operations_tests {
    use matchbook_rs::{MatchingEngine, OrderBookError, SharedEngine, Side};
    use rust_decimal::Decimal;

    fn seeded() -> MatchingEngine {
        let mut engine = MatchingEngine::new("TEST");
        engine.add_limit_order(Side::Sell, Decimal::from(50), 10).unwrap();
        engine.add_limit_order(Side::Buy, Decimal::from(50), 4).unwrap();
        engine.add_limit_order(Side::Buy, Decimal::from(48), 6).unwrap();
        engine.add_limit_order(Side::Sell, Decimal::from(52), 7).unwrap();
        engine
    }

    #[test]
    fn test_reset_completeness() {
        let mut engine = seeded();
        assert_eq!(engine.trade_count(), 1);

        engine.clear_all_data();

        let book = engine.get_book(20);
        assert!(book.bids.is_empty());
        assert!(book.asks.is_empty());
        assert!(engine.get_trades(50).is_empty());
        assert_eq!(book.last_price, Decimal::ZERO);
        assert_eq!(engine.best_bid(), None);
        assert_eq!(engine.best_ask(), None);
    }

    #[test]
    fn test_engine_usable_after_reset() {
        let mut engine = seeded();
        engine.clear_all_data();

        engine.add_limit_order(Side::Sell, Decimal::from(10), 1).unwrap();
        let result = engine.submit_market_order(Side::Buy, 1).unwrap();

        assert_eq!(result.trades.len(), 1);
        assert_eq!(engine.last_trade_price(), Decimal::from(10));
    }

    #[test]
    fn test_failed_clear_reports_not_found() {
        let mut engine = seeded();

        match engine.clear_trade(5) {
            Err(OrderBookError::TradeNotFound { index, len }) => {
                assert_eq!(index, 5);
                assert_eq!(len, 1);
            }
            other => panic!("Expected TradeNotFound, got {other:?}"),
        }
        assert!(engine.clear_ask_order(Decimal::from(49)).unwrap_err().is_not_found());
        assert_eq!(engine.trade_count(), 1);
    }

    #[test]
    fn test_clear_levels_through_shared_handle() {
        let shared = SharedEngine::new(seeded());

        let after_bid = shared.clear_bid_order(Decimal::from(48)).unwrap();
        assert!(after_bid.book.bids.is_empty());

        let after_ask = shared.clear_ask_order(Decimal::from(50)).unwrap();
        assert_eq!(after_ask.best_ask, Some(Decimal::from(52)));

        let after_trade = shared.clear_trade(0).unwrap();
        assert!(after_trade.trades.is_empty());
        assert_eq!(after_trade.book.last_price, Decimal::from(50));

        let after_trades = shared.clear_all_trades();
        assert_eq!(after_trades.book.last_price, Decimal::ZERO);

        let after_orders = shared.clear_all_orders();
        assert_eq!(after_orders.best_ask, None);
        assert_eq!(shared.snapshot(), after_orders);
    }
}
