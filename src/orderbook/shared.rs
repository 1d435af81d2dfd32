//! Thread-safe handle around a single engine.

use super::book::MatchingEngine;
use super::error::OrderBookError;
use super::operations::SubmitResult;
use super::order::{Order, OrderRequest};
use super::snapshot::{BookSnapshot, EngineSnapshot};
use super::trade::Trade;
use rust_decimal::Decimal;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Clonable handle that serializes writers and lets readers run together.
///
/// Every mutating call takes the write lock for its whole duration, so two
/// orders never match against the same liquidity concurrently. Reads share
/// the read lock and never overlap a mutation.
#[derive(Debug, Clone)]
pub struct SharedEngine {
    inner: Arc<RwLock<MatchingEngine>>,
}

impl SharedEngine {
    /// Wrap an engine in a shared handle
    pub fn new(engine: MatchingEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    // Poison is recovered: orders are validated before the book is touched.
    fn read_guard(&self) -> RwLockReadGuard<'_, MatchingEngine> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, MatchingEngine> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with shared access
    pub fn read<R>(&self, f: impl FnOnce(&MatchingEngine) -> R) -> R {
        f(&self.read_guard())
    }

    /// Run `f` with exclusive access
    pub fn write<R>(&self, f: impl FnOnce(&mut MatchingEngine) -> R) -> R {
        f(&mut self.write_guard())
    }

    pub fn submit(&self, request: &OrderRequest) -> Result<SubmitResult, OrderBookError> {
        self.write_guard().submit(request)
    }

    pub fn submit_order(&self, order: Order) -> Result<SubmitResult, OrderBookError> {
        self.write_guard().submit_order(order)
    }

    pub fn best_bid(&self) -> Option<Decimal> {
        self.read_guard().best_bid()
    }

    pub fn best_ask(&self) -> Option<Decimal> {
        self.read_guard().best_ask()
    }

    pub fn get_book(&self, depth: usize) -> BookSnapshot {
        self.read_guard().get_book(depth)
    }

    pub fn get_trades(&self, limit: usize) -> Vec<Trade> {
        self.read_guard().get_trades(limit)
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        self.read_guard().snapshot()
    }

    pub fn clear_trade(&self, index: usize) -> Result<EngineSnapshot, OrderBookError> {
        self.write_guard().clear_trade(index)
    }

    pub fn clear_all_trades(&self) -> EngineSnapshot {
        self.write_guard().clear_all_trades()
    }

    pub fn clear_bid_order(&self, price: Decimal) -> Result<EngineSnapshot, OrderBookError> {
        self.write_guard().clear_bid_order(price)
    }

    pub fn clear_ask_order(&self, price: Decimal) -> Result<EngineSnapshot, OrderBookError> {
        self.write_guard().clear_ask_order(price)
    }

    pub fn clear_all_orders(&self) -> EngineSnapshot {
        self.write_guard().clear_all_orders()
    }

    pub fn clear_all_data(&self) -> EngineSnapshot {
        self.write_guard().clear_all_data()
    }
}

impl From<MatchingEngine> for SharedEngine {
    fn from(engine: MatchingEngine) -> Self {
        Self::new(engine)
    }
}
