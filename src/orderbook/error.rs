//! Order book error types

use super::order::Side;
use rust_decimal::Decimal;
use std::fmt;

/// Reasons an incoming order is rejected before it touches the book
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Side was neither `buy` nor `sell`
    InvalidSide(String),

    /// Order type was neither `limit` nor `market`
    InvalidOrderType(String),

    /// Quantity was zero or negative
    NonPositiveQuantity(Decimal),

    /// Quantity had a fractional part
    FractionalQuantity(Decimal),

    /// Quantity does not fit in a `u64`
    QuantityOutOfRange(Decimal),

    /// Limit order submitted without a price
    MissingPrice,

    /// Limit price was zero or negative
    NonPositivePrice(Decimal),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidSide(side) => {
                write!(f, "Invalid side: {side:?} (expected buy or sell)")
            }
            ValidationError::InvalidOrderType(kind) => {
                write!(f, "Invalid order type: {kind:?} (expected limit or market)")
            }
            ValidationError::NonPositiveQuantity(quantity) => {
                write!(f, "Quantity must be positive, got {quantity}")
            }
            ValidationError::FractionalQuantity(quantity) => {
                write!(f, "Quantity must be a whole number, got {quantity}")
            }
            ValidationError::QuantityOutOfRange(quantity) => {
                write!(f, "Quantity out of range: {quantity}")
            }
            ValidationError::MissingPrice => write!(f, "Price is required for limit orders"),
            ValidationError::NonPositivePrice(price) => {
                write!(f, "Price must be positive, got {price}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors that can occur within the matching engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderBookError {
    /// The order was rejected before any mutation
    Validation(ValidationError),

    /// No trade exists at the requested position
    TradeNotFound {
        /// Requested position, newest first
        index: usize,
        /// Number of trades in the log at the time of the request
        len: usize,
    },

    /// No resting level exists at the requested price
    PriceLevelNotFound {
        /// Side of the book that was searched
        side: Side,
        /// Price that was requested
        price: Decimal,
    },

    /// Resting the order's remainder would push a level past `u64::MAX`
    LevelOverflow {
        /// Side the remainder would rest on
        side: Side,
        /// Price of the level
        price: Decimal,
        /// Quantity already resting at that price
        resting: u64,
        /// Remainder that would have been added
        quantity: u64,
    },

    /// Engine configuration could not be parsed or is inconsistent
    InvalidConfig(String),
}

impl OrderBookError {
    /// True for errors caused by a missing trade or price level
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            OrderBookError::TradeNotFound { .. } | OrderBookError::PriceLevelNotFound { .. }
        )
    }

    /// True for rejected orders
    pub fn is_validation(&self) -> bool {
        matches!(self, OrderBookError::Validation(_))
    }
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::Validation(err) => write!(f, "Validation error: {}", err),
            OrderBookError::TradeNotFound { index, len } => {
                write!(f, "Trade not found: index {} (log holds {})", index, len)
            }
            OrderBookError::PriceLevelNotFound { side, price } => {
                write!(f, "Price level not found: {} {}", side, price)
            }
            OrderBookError::LevelOverflow {
                side,
                price,
                resting,
                quantity,
            } => write!(
                f,
                "Level overflow: {} {} holds {}, cannot rest {} more",
                side, price, resting, quantity
            ),
            OrderBookError::InvalidConfig(message) => {
                write!(f, "Invalid configuration: {}", message)
            }
        }
    }
}

impl std::error::Error for OrderBookError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OrderBookError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for OrderBookError {
    fn from(err: ValidationError) -> Self {
        OrderBookError::Validation(err)
    }
}
