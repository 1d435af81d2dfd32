//! Administrative operations used to reset a session.
//!
//! Every operation returns the post-operation [`EngineSnapshot`] so a caller
//! can refresh its view without a second read. Failed operations leave the
//! engine untouched.

use super::book::MatchingEngine;
use super::error::OrderBookError;
use super::order::Side;
use super::snapshot::EngineSnapshot;
use rust_decimal::Decimal;
use tracing::info;

impl MatchingEngine {
    /// Remove the trade at `index`, counted from the newest (0 = most recent,
    /// the same order [`get_trades`](Self::get_trades) returns).
    ///
    /// The last traded price is left as is.
    pub fn clear_trade(&mut self, index: usize) -> Result<EngineSnapshot, OrderBookError> {
        let removed = self.trades.remove(index)?;
        info!(
            "Order book {}: Cleared trade #{} ({} @ {})",
            self.symbol(),
            removed.sequence,
            removed.quantity,
            removed.price
        );
        Ok(self.snapshot())
    }

    /// Empty the trade log and reset the last traded price to zero
    pub fn clear_all_trades(&mut self) -> EngineSnapshot {
        let count = self.trades.len();
        self.trades.clear();
        self.last_trade_price = Decimal::ZERO;
        info!("Order book {}: Cleared {} trades", self.symbol(), count);
        self.snapshot()
    }

    /// Remove the whole bid level at `price`
    pub fn clear_bid_order(&mut self, price: Decimal) -> Result<EngineSnapshot, OrderBookError> {
        self.clear_price_level(Side::Buy, price)
    }

    /// Remove the whole ask level at `price`
    pub fn clear_ask_order(&mut self, price: Decimal) -> Result<EngineSnapshot, OrderBookError> {
        self.clear_price_level(Side::Sell, price)
    }

    /// Remove the whole level at `price` on `side`
    pub fn clear_price_level(
        &mut self,
        side: Side,
        price: Decimal,
    ) -> Result<EngineSnapshot, OrderBookError> {
        let quantity = self
            .book_side_mut(side)
            .remove(price)
            .ok_or(OrderBookError::PriceLevelNotFound { side, price })?;
        self.cache.invalidate(side);
        info!(
            "Order book {}: Cleared {} level {} ({} resting)",
            self.symbol(),
            side,
            price,
            quantity
        );
        Ok(self.snapshot())
    }

    /// Empty both sides of the book
    pub fn clear_all_orders(&mut self) -> EngineSnapshot {
        self.bids.clear();
        self.asks.clear();
        self.cache.invalidate_all();
        info!("Order book {}: Cleared all resting orders", self.symbol());
        self.snapshot()
    }

    /// Reset books, trade log, last traded price and caches
    pub fn clear_all_data(&mut self) -> EngineSnapshot {
        self.bids.clear();
        self.asks.clear();
        self.cache.invalidate_all();
        self.trades.clear();
        self.last_trade_price = Decimal::ZERO;
        info!("Order book {}: Reset all data", self.symbol());
        self.snapshot()
    }
}
