//! Contains the core matching logic for the engine.

use super::book::MatchingEngine;
use super::order::Side;
use super::trade::Trade;
use rust_decimal::Decimal;
use tracing::trace;

impl MatchingEngine {
    /// Sweep the book opposite to `taker_side`, best level first.
    ///
    /// Each step matches `min(remaining, level quantity)` at the resting
    /// level's price and stops at the first level the taker's `limit` does
    /// not reach (`None` sweeps until liquidity runs out). Every level
    /// mutation invalidates the resting side's best-price cache.
    ///
    /// Returns the trades executed and the quantity left unmatched.
    pub(super) fn sweep(
        &mut self,
        taker_side: Side,
        quantity: u64,
        limit: Option<Decimal>,
    ) -> (Vec<Trade>, u64) {
        let resting_side = taker_side.opposite();
        let mut remaining = quantity;
        let mut trades = Vec::new();

        while remaining > 0 {
            let book = self.book_side(resting_side);
            let Some((price, available)) = book.iter().next() else {
                trace!("Order book {}: {} side exhausted", self.symbol(), resting_side);
                break;
            };
            if !book.crosses(price, limit) {
                break;
            }

            let taken = self
                .book_side_mut(resting_side)
                .take(price, remaining.min(available));
            self.cache.invalidate(resting_side);

            remaining -= taken;
            self.last_trade_price = price;
            trades.push(self.trades.record(taker_side, price, taken));
        }

        (trades, remaining)
    }

    /// Quantity a taker on `side` could fill right now without mutating the book
    pub fn peek_match(&self, side: Side, quantity: u64, limit: Option<Decimal>) -> u64 {
        let book = self.book_side(side.opposite());
        let mut matched = 0u64;

        for (price, available) in book.iter() {
            if matched >= quantity || !book.crosses(price, limit) {
                break;
            }
            matched = matched.saturating_add(available.min(quantity - matched));
        }

        matched
    }
}
