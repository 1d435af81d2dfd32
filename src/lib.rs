//! # In-Memory Order Matching Engine
//!
//! A single-instrument limit order book that accepts buy and sell orders,
//! matches them against resting liquidity by price priority, records the
//! resulting trades and keeps a consistent two-sided book.
//!
//! ## Key Features
//!
//! - **Aggregated Price Levels**: each side keeps one aggregate quantity per
//!   price in a `BTreeMap`, so bids are read highest first and asks lowest
//!   first without re-sorting.
//!
//! - **Limit and Market Orders**: limit orders sweep the opposite side up to
//!   their price and rest any remainder; market orders sweep until liquidity
//!   runs out and report the shortfall as unfilled.
//!
//! - **Resting Price Execution**: every trade executes at the resting level's
//!   price, so an aggressive taker receives price improvement.
//!
//! - **Lazy Best-Price Cache**: best bid and best ask are computed on first
//!   read and invalidated explicitly next to every mutation of their side.
//!
//! - **Validated Orders**: raw [`OrderRequest`] payloads become an [`Order`]
//!   only after validation. A rejected request never touches the book.
//!
//! - **Administrative Resets**: trades, single price levels, whole sides or
//!   the entire session can be cleared, each returning a fresh snapshot.
//!
//! ## Invariants
//!
//! After every processed order:
//!
//! 1. **No crossed book**: when both sides are populated, best bid < best ask.
//! 2. **Quantity conservation**: filled + rested + unfilled equals the
//!    submitted quantity.
//! 3. **No empty levels**: a level whose quantity reaches zero is removed.
//!
//! ## Concurrency
//!
//! [`MatchingEngine`] mutates through `&mut self` and performs no locking of
//! its own. Share it across threads with [`SharedEngine`], which serializes
//! writers behind a read/write lock and lets readers proceed together.
//!
//! ## Example
//!
//! ```
//! use matchbook_rs::{MatchingEngine, Side};
//! use rust_decimal::Decimal;
//!
//! let mut engine = MatchingEngine::new("BTC/USD");
//! engine
//!     .add_limit_order(Side::Sell, Decimal::from(100), 5)
//!     .unwrap();
//!
//! let result = engine
//!     .add_limit_order(Side::Buy, Decimal::from(101), 3)
//!     .unwrap();
//! assert_eq!(result.trades.len(), 1);
//! assert_eq!(result.trades[0].price, Decimal::from(100));
//!
//! let book = engine.get_book(20);
//! assert_eq!(book.asks[0].quantity, 2);
//! assert!(book.bids.is_empty());
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events and never installs a subscriber itself.
//! Binaries can call [`setup_logger`], which builds an `EnvFilter` from the
//! `LOGLEVEL` environment variable.

pub mod orderbook;

mod utils;

pub use orderbook::{
    BookSnapshot, EngineConfig, EngineSnapshot, LevelView, MatchingEngine, Order, OrderBookError,
    OrderKind, OrderRequest, OrderStatus, OrderType, SharedEngine, Side, SubmitResult, Trade,
    TradeStats, ValidationError,
};
pub use utils::{current_time_millis, setup_logger};
