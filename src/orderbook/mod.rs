//! Matching engine: aggregated price levels, best-price cache, trade log and
//! the operations that tie them together.

pub mod book;
mod cache;
mod config;
mod error;
mod matching;
mod modifications;
mod operations;
mod order;
mod shared;
mod side;
mod snapshot;
mod trade;

pub use book::MatchingEngine;
pub use cache::BestPriceCache;
pub use config::{DEFAULT_BOOK_DEPTH, DEFAULT_TRADE_LIMIT, EngineConfig};
pub use error::{OrderBookError, ValidationError};
pub use operations::{OrderStatus, SubmitResult};
pub use order::{Order, OrderKind, OrderRequest, OrderType, Side, validate_price, validate_quantity};
pub use shared::SharedEngine;
pub use side::PriceLevelBook;
pub use snapshot::{BookSnapshot, EngineSnapshot, LevelView};
pub use trade::{Trade, TradeLog, TradeStats};
