//! Engine configuration

use super::error::OrderBookError;
use serde::{Deserialize, Serialize};

/// Depth used by [`MatchingEngine::snapshot`](crate::MatchingEngine::snapshot)
pub const DEFAULT_BOOK_DEPTH: usize = 20;

/// Trade count used by [`MatchingEngine::snapshot`](crate::MatchingEngine::snapshot)
pub const DEFAULT_TRADE_LIMIT: usize = 50;

/// Settings for a single engine instance.
///
/// Every field has a default, so a partial JSON document such as
/// `{"symbol": "BTC/USD"}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Instrument label used in logs and snapshots
    pub symbol: String,

    /// Number of levels per side returned by the default snapshot
    pub default_depth: usize,

    /// Number of trades returned by the default snapshot
    pub default_trade_limit: usize,

    /// Upper bound on retained trades; `None` keeps every trade
    pub max_trade_log: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            symbol: "DEFAULT".to_string(),
            default_depth: DEFAULT_BOOK_DEPTH,
            default_trade_limit: DEFAULT_TRADE_LIMIT,
            max_trade_log: None,
        }
    }
}

impl EngineConfig {
    /// Default configuration for `symbol`
    pub fn with_symbol(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self, OrderBookError> {
        let config: EngineConfig = serde_json::from_str(json)
            .map_err(|err| OrderBookError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make reads or the trade log useless
    pub fn validate(&self) -> Result<(), OrderBookError> {
        if self.symbol.trim().is_empty() {
            return Err(OrderBookError::InvalidConfig(
                "symbol must not be empty".to_string(),
            ));
        }
        if self.default_depth == 0 {
            return Err(OrderBookError::InvalidConfig(
                "default_depth must be positive".to_string(),
            ));
        }
        if self.default_trade_limit == 0 {
            return Err(OrderBookError::InvalidConfig(
                "default_trade_limit must be positive".to_string(),
            ));
        }
        if self.max_trade_log == Some(0) {
            return Err(OrderBookError::InvalidConfig(
                "max_trade_log must be positive when set".to_string(),
            ));
        }
        Ok(())
    }
}
