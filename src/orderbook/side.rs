//! One side of the book: price levels with aggregate resting quantity.

use super::order::Side;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Aggregated price levels for one side of the book.
///
/// Keys are kept in a `BTreeMap`, so iteration order is deterministic:
/// bids walk from the highest price down, asks from the lowest price up.
/// A level with zero quantity is never stored.
#[derive(Debug, Clone)]
pub struct PriceLevelBook {
    side: Side,
    levels: BTreeMap<Decimal, u64>,
}

impl PriceLevelBook {
    /// Create an empty book for the given side
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
        }
    }

    /// Side this book holds
    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of distinct price levels
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Aggregate quantity resting at `price`, if any
    pub fn quantity_at(&self, price: Decimal) -> Option<u64> {
        self.levels.get(&price).copied()
    }

    /// Sum of quantity over every level, saturating at `u64::MAX`
    pub fn total_quantity(&self) -> u64 {
        self.levels
            .values()
            .fold(0u64, |total, quantity| total.saturating_add(*quantity))
    }

    /// Best price for this side: highest bid or lowest ask
    pub fn best_price(&self) -> Option<Decimal> {
        match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        }
    }

    /// Levels in priority order (bids descending, asks ascending)
    pub fn iter(&self) -> Box<dyn Iterator<Item = (Decimal, u64)> + '_> {
        let levels = self.levels.iter().map(|(price, quantity)| (*price, *quantity));
        match self.side {
            Side::Buy => Box::new(levels.rev()),
            Side::Sell => Box::new(levels),
        }
    }

    /// Top `depth` levels in priority order
    pub fn depth(&self, depth: usize) -> Vec<(Decimal, u64)> {
        self.iter().take(depth).collect()
    }

    /// Whether `quantity` more can rest at `price` without the level
    /// exceeding `u64::MAX`
    pub fn can_add(&self, price: Decimal, quantity: u64) -> bool {
        self.quantity_at(price)
            .unwrap_or(0)
            .checked_add(quantity)
            .is_some()
    }

    /// Add resting quantity at `price`, merging with an existing level.
    ///
    /// Returns the new aggregate quantity at that price, or `None` when the
    /// level would overflow. The book is unchanged in that case.
    pub fn add(&mut self, price: Decimal, quantity: u64) -> Option<u64> {
        if quantity == 0 {
            return Some(self.quantity_at(price).unwrap_or(0));
        }
        let merged = self.quantity_at(price).unwrap_or(0).checked_add(quantity)?;
        self.levels.insert(price, merged);
        Some(merged)
    }

    /// Take up to `quantity` from the level at `price`, removing the level once
    /// it is exhausted. Returns the quantity actually taken.
    pub fn take(&mut self, price: Decimal, quantity: u64) -> u64 {
        match self.levels.entry(price) {
            Entry::Vacant(_) => 0,
            Entry::Occupied(mut entry) => {
                let taken = quantity.min(*entry.get());
                *entry.get_mut() -= taken;
                if *entry.get() == 0 {
                    entry.remove();
                }
                taken
            }
        }
    }

    /// Remove the whole level at `price`, returning its quantity
    pub fn remove(&mut self, price: Decimal) -> Option<u64> {
        self.levels.remove(&price)
    }

    /// Drop every level
    pub fn clear(&mut self) {
        self.levels.clear();
    }

    /// Whether a taker on the opposite side with limit `limit` can trade
    /// against a level at `price`.
    ///
    /// Asks accept buyers at or above the ask; bids accept sellers at or
    /// below the bid. A `None` limit (market order) always crosses.
    pub fn crosses(&self, price: Decimal, limit: Option<Decimal>) -> bool {
        match (self.side, limit) {
            (_, None) => true,
            (Side::Sell, Some(limit)) => price <= limit,
            (Side::Buy, Some(limit)) => price >= limit,
        }
    }
}
