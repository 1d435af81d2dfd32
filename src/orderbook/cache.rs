//! Lazily computed best bid / best ask.

use super::order::Side;
use super::side::PriceLevelBook;
use rust_decimal::Decimal;
use std::sync::OnceLock;
use tracing::trace;

/// Best-price cache cells for both sides of the book.
///
/// A cell is filled on first read after a mutation and reused until the next
/// [`invalidate`](Self::invalidate) for that side. Filling only needs `&self`,
/// so readers sharing the engine behind a read lock can still populate it;
/// invalidation needs `&mut self` and therefore happens under the writer.
#[derive(Debug, Default)]
pub struct BestPriceCache {
    best_bid: OnceLock<Option<Decimal>>,
    best_ask: OnceLock<Option<Decimal>>,
}

impl BestPriceCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn cell(&self, side: Side) -> &OnceLock<Option<Decimal>> {
        match side {
            Side::Buy => &self.best_bid,
            Side::Sell => &self.best_ask,
        }
    }

    /// Drop the cached best price for `side`
    pub fn invalidate(&mut self, side: Side) {
        let cell = match side {
            Side::Buy => &mut self.best_bid,
            Side::Sell => &mut self.best_ask,
        };
        if cell.take().is_some() {
            trace!("Invalidated best {} cache", side);
        }
    }

    /// Drop both cached prices
    pub fn invalidate_all(&mut self) {
        self.invalidate(Side::Buy);
        self.invalidate(Side::Sell);
    }

    /// Whether a value is currently cached for `side`
    pub fn is_cached(&self, side: Side) -> bool {
        self.cell(side).get().is_some()
    }

    /// Cached best price of `book`, scanning the book on a miss
    pub fn best_price(&self, book: &PriceLevelBook) -> Option<Decimal> {
        let side = book.side();
        *self.cell(side).get_or_init(|| {
            let best = book.best_price();
            trace!("Recomputed best {} price: {:?}", side, best);
            best
        })
    }
}
