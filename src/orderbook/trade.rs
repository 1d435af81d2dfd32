//! Executed trades and the append-only trade log.

use super::error::OrderBookError;
use super::order::Side;
use crate::utils::current_time_millis;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::trace;
use uuid::Uuid;

/// A single execution between an incoming order and a resting level.
///
/// The trade always executes at the resting level's price, so `price` and
/// `resting_price` are equal; both are kept so consumers never need to know
/// that convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Unique identifier, derived from the engine namespace and sequence
    pub id: Uuid,

    /// Position in the engine's execution order, strictly increasing
    pub sequence: u64,

    /// Execution price
    pub price: Decimal,

    /// Executed quantity
    pub quantity: u64,

    /// Execution time in milliseconds since epoch
    pub timestamp: u64,

    /// Side of the incoming (taker) order
    pub taker_side: Side,

    /// Price of the resting level the taker matched against
    pub resting_price: Decimal,
}

impl Trade {
    /// Notional value of the trade (price * quantity), `None` on decimal overflow
    pub fn notional(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

/// Open / high / low / last and volume over a window of trades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeStats {
    /// Number of trades in the window
    pub count: usize,
    /// Price of the oldest trade in the window
    pub open: Decimal,
    /// Highest price in the window
    pub high: Decimal,
    /// Lowest price in the window
    pub low: Decimal,
    /// Price of the newest trade in the window
    pub last: Decimal,
    /// Total executed quantity
    pub volume: u64,
}

/// Time-ordered log of trades, oldest first.
///
/// Trades are only ever appended by matching; removal happens through the
/// explicit administrative operations. An optional bound evicts the oldest
/// entries once exceeded.
#[derive(Debug, Clone)]
pub struct TradeLog {
    trades: VecDeque<Trade>,
    next_sequence: u64,
    namespace: Uuid,
    max_len: Option<usize>,
}

impl TradeLog {
    /// Create an empty log, optionally bounded to `max_len` trades
    pub fn new(max_len: Option<usize>) -> Self {
        Self {
            trades: VecDeque::new(),
            next_sequence: 0,
            // Per-log namespace keeps trade ids unique across engines
            namespace: Uuid::new_v4(),
            max_len,
        }
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// The most recently appended trade
    pub fn last(&self) -> Option<&Trade> {
        self.trades.back()
    }

    /// Append a trade executed at `price` for `quantity` and return it
    pub fn record(&mut self, taker_side: Side, price: Decimal, quantity: u64) -> Trade {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let trade = Trade {
            id: Uuid::new_v5(&self.namespace, &sequence.to_be_bytes()),
            sequence,
            price,
            quantity,
            timestamp: current_time_millis(),
            taker_side,
            resting_price: price,
        };
        trace!(
            "Recorded trade #{}: {} {} @ {}",
            sequence, taker_side, quantity, price
        );
        self.trades.push_back(trade);

        if let Some(max_len) = self.max_len {
            while self.trades.len() > max_len {
                if let Some(evicted) = self.trades.pop_front() {
                    trace!("Evicted trade #{} from bounded log", evicted.sequence);
                }
            }
        }

        trade
    }

    /// The `limit` most recent trades, newest first
    pub fn recent(&self, limit: usize) -> Vec<Trade> {
        self.trades.iter().rev().take(limit).copied().collect()
    }

    /// Trade at `index`, counted from the newest (0 = most recent)
    pub fn get(&self, index: usize) -> Option<&Trade> {
        let position = self.position(index)?;
        self.trades.get(position)
    }

    /// Remove the trade at `index`, counted from the newest
    pub fn remove(&mut self, index: usize) -> Result<Trade, OrderBookError> {
        let len = self.trades.len();
        self.position(index)
            .and_then(|position| self.trades.remove(position))
            .ok_or(OrderBookError::TradeNotFound { index, len })
    }

    /// Remove every trade. Sequence numbers keep increasing afterwards.
    pub fn clear(&mut self) {
        self.trades.clear();
    }

    /// Statistics over the `limit` most recent trades, `None` if the log is empty
    pub fn stats(&self, limit: usize) -> Option<TradeStats> {
        let start = self.trades.len().saturating_sub(limit);
        let mut window = self.trades.iter().skip(start);
        let first = window.next()?;

        let mut stats = TradeStats {
            count: 1,
            open: first.price,
            high: first.price,
            low: first.price,
            last: first.price,
            volume: first.quantity,
        };
        for trade in window {
            stats.count += 1;
            stats.high = stats.high.max(trade.price);
            stats.low = stats.low.min(trade.price);
            stats.last = trade.price;
            stats.volume = stats.volume.saturating_add(trade.quantity);
        }
        Some(stats)
    }

    fn position(&self, index: usize) -> Option<usize> {
        self.trades.len().checked_sub(index.checked_add(1)?)
    }
}

impl Default for TradeLog {
    fn default() -> Self {
        Self::new(None)
    }
}
