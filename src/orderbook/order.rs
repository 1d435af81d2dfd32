//! Inbound order types and their validation.
//!
//! Requests arrive as a loosely-typed [`OrderRequest`] (strings and decimals
//! straight from a request body). An [`Order`] can only be obtained through
//! validation, so everything past this module works with well-formed orders.

use super::error::ValidationError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Side of the book an order trades on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy side, rests on the bid book
    Buy,
    /// Sell side, rests on the ask book
    Sell,
}

impl Side {
    /// The side this order matches against
    pub fn opposite(&self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for Side {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            _ => Err(ValidationError::InvalidSide(s.to_string())),
        }
    }
}

/// Whether an order carries a price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Priced order, rests if not fully matched
    Limit,
    /// Unpriced order, never rests
    Market,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Limit => write!(f, "LIMIT"),
            OrderType::Market => write!(f, "MARKET"),
        }
    }
}

impl FromStr for OrderType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "limit" => Ok(OrderType::Limit),
            "market" => Ok(OrderType::Market),
            _ => Err(ValidationError::InvalidOrderType(s.to_string())),
        }
    }
}

fn default_order_type() -> String {
    "limit".to_string()
}

/// Unvalidated order payload as received from a request layer.
///
/// ```json
/// {"side": "buy", "type": "limit", "price": 100, "quantity": 5}
/// ```
///
/// `type` defaults to `limit` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// `buy` or `sell`, case-insensitive
    pub side: String,

    /// `limit` or `market`, case-insensitive
    #[serde(rename = "type", default = "default_order_type")]
    pub order_type: String,

    /// Limit price; ignored for market orders
    #[serde(default)]
    pub price: Option<Decimal>,

    /// Requested quantity, must be a positive whole number
    pub quantity: Decimal,
}

impl OrderRequest {
    /// Convenience constructor for a limit request
    pub fn limit(side: &str, price: Decimal, quantity: Decimal) -> Self {
        Self {
            side: side.to_string(),
            order_type: "limit".to_string(),
            price: Some(price),
            quantity,
        }
    }

    /// Convenience constructor for a market request
    pub fn market(side: &str, quantity: Decimal) -> Self {
        Self {
            side: side.to_string(),
            order_type: "market".to_string(),
            price: None,
            quantity,
        }
    }
}

/// Pricing of a validated order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OrderKind {
    /// Limit order at a strictly positive price
    Limit {
        /// Worst acceptable price for the taker
        price: Decimal,
    },
    /// Market order, sweeps whatever opposite liquidity exists
    Market,
}

/// A validated order. Only constructible through [`Order::limit`],
/// [`Order::market`] or `TryFrom<OrderRequest>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Order {
    side: Side,
    #[serde(flatten)]
    kind: OrderKind,
    quantity: u64,
}

impl Order {
    /// Build a limit order, rejecting a zero quantity or a non-positive price
    pub fn limit(side: Side, price: Decimal, quantity: u64) -> Result<Self, ValidationError> {
        let price = validate_price(Some(price))?;
        let quantity = validate_whole_quantity(quantity)?;
        Ok(Self {
            side,
            kind: OrderKind::Limit { price },
            quantity,
        })
    }

    /// Build a market order, rejecting a zero quantity
    pub fn market(side: Side, quantity: u64) -> Result<Self, ValidationError> {
        let quantity = validate_whole_quantity(quantity)?;
        Ok(Self {
            side,
            kind: OrderKind::Market,
            quantity,
        })
    }

    /// Side of the order
    pub fn side(&self) -> Side {
        self.side
    }

    /// Limit or market pricing
    pub fn kind(&self) -> OrderKind {
        self.kind
    }

    /// Requested quantity
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Limit price, `None` for market orders
    pub fn limit_price(&self) -> Option<Decimal> {
        match self.kind {
            OrderKind::Limit { price } => Some(price),
            OrderKind::Market => None,
        }
    }

    /// The untagged order type
    pub fn order_type(&self) -> OrderType {
        match self.kind {
            OrderKind::Limit { .. } => OrderType::Limit,
            OrderKind::Market => OrderType::Market,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            OrderKind::Limit { price } => {
                write!(f, "{} LIMIT {} @ {}", self.side, self.quantity, price)
            }
            OrderKind::Market => write!(f, "{} MARKET {}", self.side, self.quantity),
        }
    }
}

impl TryFrom<&OrderRequest> for Order {
    type Error = ValidationError;

    fn try_from(request: &OrderRequest) -> Result<Self, Self::Error> {
        let side = Side::from_str(&request.side)?;
        let order_type = OrderType::from_str(&request.order_type)?;
        let quantity = validate_quantity(request.quantity)?;

        match order_type {
            OrderType::Limit => {
                let price = validate_price(request.price)?;
                Ok(Self {
                    side,
                    kind: OrderKind::Limit { price },
                    quantity,
                })
            }
            OrderType::Market => {
                if let Some(price) = request.price {
                    trace!("Ignoring price {} supplied with a market order", price);
                }
                Ok(Self {
                    side,
                    kind: OrderKind::Market,
                    quantity,
                })
            }
        }
    }
}

impl TryFrom<OrderRequest> for Order {
    type Error = ValidationError;

    fn try_from(request: OrderRequest) -> Result<Self, Self::Error> {
        Order::try_from(&request)
    }
}

/// Checks that a decimal quantity is a positive whole number that fits a `u64`
pub fn validate_quantity(quantity: Decimal) -> Result<u64, ValidationError> {
    if quantity <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveQuantity(quantity));
    }
    if !quantity.fract().is_zero() {
        return Err(ValidationError::FractionalQuantity(quantity));
    }
    quantity
        .to_u64()
        .ok_or(ValidationError::QuantityOutOfRange(quantity))
}

fn validate_whole_quantity(quantity: u64) -> Result<u64, ValidationError> {
    if quantity == 0 {
        return Err(ValidationError::NonPositiveQuantity(Decimal::ZERO));
    }
    Ok(quantity)
}

/// Checks that a limit price is present and strictly positive.
///
/// Trailing zeros are stripped so `100` and `100.00` address the same level.
pub fn validate_price(price: Option<Decimal>) -> Result<Decimal, ValidationError> {
    match price {
        None => Err(ValidationError::MissingPrice),
        Some(price) if price <= Decimal::ZERO => Err(ValidationError::NonPositivePrice(price)),
        Some(price) => Ok(price.normalize()),
    }
}
