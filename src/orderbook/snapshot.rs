//! Order book snapshots for market data

use super::trade::Trade;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// One aggregated price level as seen by readers.
///
/// Serialized as a `[price, quantity]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "(Decimal, u64)", from = "(Decimal, u64)")]
pub struct LevelView {
    /// Level price
    pub price: Decimal,
    /// Aggregate resting quantity
    pub quantity: u64,
}

impl LevelView {
    pub fn new(price: Decimal, quantity: u64) -> Self {
        Self { price, quantity }
    }

    /// Price times quantity, `None` on decimal overflow
    pub fn notional(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

impl From<(Decimal, u64)> for LevelView {
    fn from((price, quantity): (Decimal, u64)) -> Self {
        Self { price, quantity }
    }
}

impl From<LevelView> for (Decimal, u64) {
    fn from(level: LevelView) -> Self {
        (level.price, level.quantity)
    }
}

/// A depth-limited view of both sides of the book.
///
/// Contains no timestamp, so two snapshots taken without an intervening
/// mutation compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    /// The symbol or identifier for this order book
    pub symbol: String,

    /// Bid levels, highest price first
    pub bids: Vec<LevelView>,

    /// Ask levels, lowest price first
    pub asks: Vec<LevelView>,

    /// Price of the most recent trade, zero if none
    pub last_price: Decimal,
}

impl BookSnapshot {
    /// Get the best bid level
    pub fn best_bid(&self) -> Option<LevelView> {
        let bid = self.bids.first().copied();
        trace!("best_bid: {:?}", bid);
        bid
    }

    /// Get the best ask level
    pub fn best_ask(&self) -> Option<LevelView> {
        let ask = self.asks.first().copied();
        trace!("best_ask: {:?}", ask);
        ask
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<Decimal> {
        let mid_price = match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid.price + ask.price) / Decimal::TWO),
            _ => None,
        };
        trace!("mid_price: {:?}", mid_price);
        mid_price
    }

    /// Get the spread (best ask - best bid)
    pub fn spread(&self) -> Option<Decimal> {
        let spread = match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.price - bid.price),
            _ => None,
        };
        trace!("spread: {:?}", spread);
        spread
    }

    /// Total quantity across the bid levels in this snapshot, saturating at `u64::MAX`
    pub fn total_bid_volume(&self) -> u64 {
        let volume = total_volume(&self.bids);
        trace!("total_bid_volume: {:?}", volume);
        volume
    }

    /// Total quantity across the ask levels in this snapshot, saturating at `u64::MAX`
    pub fn total_ask_volume(&self) -> u64 {
        let volume = total_volume(&self.asks);
        trace!("total_ask_volume: {:?}", volume);
        volume
    }

    /// Total value on the bid side (price * quantity), `None` if it exceeds
    /// the decimal range
    pub fn total_bid_value(&self) -> Option<Decimal> {
        total_value(&self.bids)
    }

    /// Total value on the ask side (price * quantity), `None` if it exceeds
    /// the decimal range
    pub fn total_ask_value(&self) -> Option<Decimal> {
        total_value(&self.asks)
    }

    /// Render the snapshot as JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn total_volume(levels: &[LevelView]) -> u64 {
    levels
        .iter()
        .fold(0u64, |total, level| total.saturating_add(level.quantity))
}

fn total_value(levels: &[LevelView]) -> Option<Decimal> {
    levels.iter().try_fold(Decimal::ZERO, |total, level| {
        total.checked_add(level.notional()?)
    })
}

/// Everything a polling client needs after a read or an administrative call:
/// the book, the recent trades and the top of book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Depth-limited book
    pub book: BookSnapshot,

    /// Recent trades, newest first
    pub trades: Vec<Trade>,

    /// Highest bid, if any
    pub best_bid: Option<Decimal>,

    /// Lowest ask, if any
    pub best_ask: Option<Decimal>,

    /// Best ask minus best bid, when both exist
    pub spread: Option<Decimal>,
}
