//! Order submission

use super::book::MatchingEngine;
use super::error::OrderBookError;
use super::order::{Order, OrderKind, OrderRequest, Side};
use super::trade::Trade;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, trace, warn};

/// Terminal state of a submitted order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// The whole quantity traded
    FullyFilled,
    /// A limit order's remainder now rests in the book
    Rested,
    /// A market order ran out of opposite liquidity; the remainder is dropped
    Unfilled,
}

/// Outcome of a single submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitResult {
    /// The validated order that was processed
    pub order: Order,

    /// Trades executed by this order, in execution order
    pub trades: Vec<Trade>,

    /// Quantity executed across all trades
    pub filled_quantity: u64,

    /// Quantity added to the book (limit orders only)
    pub rested_quantity: u64,

    /// Quantity that could not be matched (market orders only)
    pub unfilled_quantity: u64,
}

impl SubmitResult {
    /// Terminal state of the order
    pub fn status(&self) -> OrderStatus {
        if self.rested_quantity > 0 {
            OrderStatus::Rested
        } else if self.unfilled_quantity > 0 {
            OrderStatus::Unfilled
        } else {
            OrderStatus::FullyFilled
        }
    }

    /// True when some, but not all, of the quantity traded
    pub fn is_partially_filled(&self) -> bool {
        self.filled_quantity > 0 && self.filled_quantity < self.order.quantity()
    }
}

impl MatchingEngine {
    /// Validate a raw request and process it.
    ///
    /// A rejected request leaves the engine untouched.
    pub fn submit(&mut self, request: &OrderRequest) -> Result<SubmitResult, OrderBookError> {
        let order = Order::try_from(request).map_err(|err| {
            warn!("Order book {}: Rejected order: {}", self.symbol(), err);
            OrderBookError::from(err)
        })?;
        self.submit_order(order)
    }

    /// Process an already validated order: sweep, then rest any limit remainder.
    ///
    /// Fails with [`OrderBookError::LevelOverflow`] when the limit remainder
    /// could not rest without overflowing its level; the engine is untouched
    /// in that case.
    pub fn submit_order(&mut self, order: Order) -> Result<SubmitResult, OrderBookError> {
        trace!("Order book {}: Submitting {}", self.symbol(), order);
        self.check_rest_capacity(&order).inspect_err(|err| {
            warn!("Order book {}: Rejected order {}: {}", self.symbol(), order, err);
        })?;

        let side = order.side();
        let (trades, remaining) = self.sweep(side, order.quantity(), order.limit_price());
        let filled_quantity = order.quantity() - remaining;

        let (rested_quantity, unfilled_quantity) = match order.kind() {
            OrderKind::Limit { price } if remaining > 0 => {
                let level_quantity = self.book_side_mut(side).add(price, remaining);
                self.cache.invalidate(side);
                trace!(
                    "Order book {}: Rested {} at {} on {} side (level now {:?})",
                    self.symbol(),
                    remaining,
                    price,
                    side,
                    level_quantity
                );
                (remaining, 0)
            }
            OrderKind::Limit { .. } => (0, 0),
            OrderKind::Market => (0, remaining),
        };

        debug!(
            "Order book {}: {} produced {} trades, filled {}, rested {}, unfilled {}",
            self.symbol(),
            order,
            trades.len(),
            filled_quantity,
            rested_quantity,
            unfilled_quantity
        );

        Ok(SubmitResult {
            order,
            trades,
            filled_quantity,
            rested_quantity,
            unfilled_quantity,
        })
    }

    /// Reject a limit order whose unmatched remainder would overflow the
    /// level it rests on. Runs before the sweep so a rejection mutates nothing.
    fn check_rest_capacity(&self, order: &Order) -> Result<(), OrderBookError> {
        let OrderKind::Limit { price } = order.kind() else {
            return Ok(());
        };
        let side = order.side();
        let remaining = order.quantity() - self.peek_match(side, order.quantity(), Some(price));
        let book = self.book_side(side);
        if book.can_add(price, remaining) {
            Ok(())
        } else {
            Err(OrderBookError::LevelOverflow {
                side,
                price,
                resting: book.quantity_at(price).unwrap_or(0),
                quantity: remaining,
            })
        }
    }

    /// Validate and submit a limit order
    pub fn add_limit_order(
        &mut self,
        side: Side,
        price: Decimal,
        quantity: u64,
    ) -> Result<SubmitResult, OrderBookError> {
        let order = Order::limit(side, price, quantity)?;
        self.submit_order(order)
    }

    /// Validate and submit a market order
    pub fn submit_market_order(
        &mut self,
        side: Side,
        quantity: u64,
    ) -> Result<SubmitResult, OrderBookError> {
        let order = Order::market(side, quantity)?;
        self.submit_order(order)
    }
}
