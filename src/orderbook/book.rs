//! Core engine state and read projections

use super::cache::BestPriceCache;
use super::config::EngineConfig;
use super::error::OrderBookError;
use super::order::Side;
use super::side::PriceLevelBook;
use super::snapshot::{BookSnapshot, EngineSnapshot, LevelView};
use super::trade::{Trade, TradeLog, TradeStats};
use rust_decimal::Decimal;
use tracing::trace;

/// The matching engine for a single instrument.
///
/// Owns both sides of the book, the trade log, the last traded price and the
/// best-price cache. All mutation goes through `&mut self`, so a single owner
/// (or [`SharedEngine`](crate::SharedEngine)) serializes writers while reads
/// only need `&self`.
#[derive(Debug)]
pub struct MatchingEngine {
    /// Settings this engine was created with
    pub(super) config: EngineConfig,

    /// Bid side price levels (buy orders)
    pub(super) bids: PriceLevelBook,

    /// Ask side price levels (sell orders)
    pub(super) asks: PriceLevelBook,

    /// Executed trades, oldest first
    pub(super) trades: TradeLog,

    /// The last price at which a trade occurred, zero before the first trade
    pub(super) last_trade_price: Decimal,

    /// Lazily computed best bid / best ask
    pub(super) cache: BestPriceCache,
}

impl MatchingEngine {
    /// Create a new engine for the given symbol with default settings
    pub fn new(symbol: &str) -> Self {
        Self::from_parts(EngineConfig::with_symbol(symbol))
    }

    /// Create a new engine from a validated configuration
    pub fn with_config(config: EngineConfig) -> Result<Self, OrderBookError> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: EngineConfig) -> Self {
        trace!("Creating matching engine for {}", config.symbol);
        Self {
            trades: TradeLog::new(config.max_trade_log),
            config,
            bids: PriceLevelBook::new(Side::Buy),
            asks: PriceLevelBook::new(Side::Sell),
            last_trade_price: Decimal::ZERO,
            cache: BestPriceCache::new(),
        }
    }

    /// Get the symbol of this engine
    pub fn symbol(&self) -> &str {
        &self.config.symbol
    }

    /// Settings this engine was created with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Price levels resting on `side`
    pub fn book_side(&self, side: Side) -> &PriceLevelBook {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    pub(super) fn book_side_mut(&mut self, side: Side) -> &mut PriceLevelBook {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// Get the best bid price, if any
    pub fn best_bid(&self) -> Option<Decimal> {
        self.cache.best_price(&self.bids)
    }

    /// Get the best ask price, if any
    pub fn best_ask(&self) -> Option<Decimal> {
        self.cache.best_price(&self.asks)
    }

    /// Get the spread (best ask - best bid)
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Spread as a percentage of the best bid
    pub fn spread_percent(&self) -> Option<Decimal> {
        let bid = self.best_bid()?;
        let spread = self.spread()?;
        spread
            .checked_div(bid)
            .map(|ratio| ratio * Decimal::ONE_HUNDRED)
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid + ask) / Decimal::TWO),
            _ => None,
        }
    }

    /// Price of the most recent trade, zero if nothing has traded
    pub fn last_trade_price(&self) -> Decimal {
        self.last_trade_price
    }

    /// True when both sides are populated and the best bid is not below the best ask
    pub fn is_crossed(&self) -> bool {
        matches!(
            (self.best_bid(), self.best_ask()),
            (Some(bid), Some(ask)) if bid >= ask
        )
    }

    /// Both sides truncated to `depth` levels, plus the last traded price.
    ///
    /// Levels with a non-positive price or quantity are skipped.
    pub fn get_book(&self, depth: usize) -> BookSnapshot {
        trace!("Order book {}: Snapshot at depth {}", self.symbol(), depth);
        BookSnapshot {
            symbol: self.config.symbol.clone(),
            bids: Self::visible_levels(&self.bids, depth),
            asks: Self::visible_levels(&self.asks, depth),
            last_price: self.last_trade_price,
        }
    }

    fn visible_levels(book: &PriceLevelBook, depth: usize) -> Vec<LevelView> {
        book.iter()
            .filter(|(price, quantity)| *price > Decimal::ZERO && *quantity > 0)
            .take(depth)
            .map(LevelView::from)
            .collect()
    }

    /// The `limit` most recent trades, newest first
    pub fn get_trades(&self, limit: usize) -> Vec<Trade> {
        trace!("Order book {}: Reading {} trades", self.symbol(), limit);
        self.trades.recent(limit)
    }

    /// Number of trades currently held in the log
    pub fn trade_count(&self) -> usize {
        self.trades.len()
    }

    /// Open / high / low / last and volume over the `limit` most recent trades
    pub fn trade_stats(&self, limit: usize) -> Option<TradeStats> {
        self.trades.stats(limit)
    }

    /// Book, trades and top of book using the configured default depth and limit
    pub fn snapshot(&self) -> EngineSnapshot {
        self.snapshot_with(self.config.default_depth, self.config.default_trade_limit)
    }

    /// Book, trades and top of book with explicit depth and trade limit
    pub fn snapshot_with(&self, depth: usize, trade_limit: usize) -> EngineSnapshot {
        EngineSnapshot {
            book: self.get_book(depth),
            trades: self.get_trades(trade_limit),
            best_bid: self.best_bid(),
            best_ask: self.best_ask(),
            spread: self.spread(),
        }
    }
}
