//! The order book for a single symbol.
//!
//! The book owns every order record for its symbol in an id index
//! (`HashMap<OrderId, Order>`); the two [`Ladder`]s hold ids only, so an
//! order is addressable both by price-time priority and by id without
//! duplicating the record. Filled and cancelled orders leave the ladder but
//! stay in the index as tombstones — a later UPDATE or CANCEL referencing
//! them is a no-op.
//!
//! Each mutating operation reports expected rejections as `Err`; the caller
//! decides whether to surface them. After any operation returns, the book is
//! never in a crossed state.

use std::collections::HashMap;

use matchbook_types::{
    constants::DEFAULT_TRADE_LOG_CAPACITY, MatchbookError, Order, OrderId, Result, Side, Symbol,
    Trade,
};
use rust_decimal::Decimal;

use crate::{clock::SeqClock, ladder::Ladder};

/// Aggregate resting volume at one price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelSummary {
    pub price: Decimal,
    pub volume: u64,
}

/// The order book for a single symbol.
#[derive(Debug)]
pub struct OrderBook {
    symbol: Symbol,
    pub(crate) bids: Ladder,
    pub(crate) asks: Ladder,
    /// Owning index of every order ever admitted, tombstones included.
    pub(crate) orders: HashMap<OrderId, Order>,
    pub(crate) trades: Vec<Trade>,
}

impl OrderBook {
    #[must_use]
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            bids: Ladder::new(Side::Buy),
            asks: Ladder::new(Side::Sell),
            orders: HashMap::new(),
            trades: Vec::with_capacity(DEFAULT_TRADE_LOG_CAPACITY),
        }
    }

    #[must_use]
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub(crate) fn ladder(&self, side: Side) -> &Ladder {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    pub(crate) fn ladder_mut(&mut self, side: Side) -> &mut Ladder {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    // =================================================================
    // Operations
    // =================================================================

    /// Admit a new order, then drain any crossing liquidity it exposes.
    ///
    /// The order receives a fresh priority stamp from `clock`. Trades fire as
    /// a side effect into the book's trade log.
    pub fn insert(&mut self, mut order: Order, clock: &mut SeqClock) -> Result<()> {
        if self.orders.contains_key(&order.id) {
            return Err(MatchbookError::DuplicateOrder(order.id));
        }

        order.stamp = clock.tick();
        order.cancelled = false;

        let id = order.id;
        let side = order.side;
        let price = order.price;

        self.orders.insert(id, order);
        self.ladder_mut(side).insert(price, id);

        self.match_crossing(id, side, clock);
        Ok(())
    }

    /// Apply a price/volume update.
    ///
    /// A price change or a volume increase forfeits time priority: the order
    /// re-enters its ladder with a fresh stamp. A pure volume decrease keeps
    /// its stamp and queue position, as if the difference had already
    /// traded. Non-positive volumes are discarded — they do not cancel.
    pub fn update(
        &mut self,
        id: OrderId,
        new_price: Decimal,
        new_volume: i64,
        clock: &mut SeqClock,
    ) -> Result<()> {
        let order = self
            .orders
            .get(&id)
            .ok_or(MatchbookError::OrderNotFound(id))?;
        if !order.is_live() {
            return Err(MatchbookError::OrderNotLive(id));
        }
        if new_volume <= 0 {
            return Err(MatchbookError::VolumeNotPositive {
                id,
                volume: new_volume,
            });
        }
        #[allow(clippy::cast_sign_loss)]
        let new_volume = new_volume as u64;

        let side = order.side;
        let old_price = order.price;
        let old_volume = order.volume;

        let price_change = new_price != old_price;
        let volume_increase = new_volume > old_volume;

        if price_change || volume_increase {
            self.ladder_mut(side).remove(old_price, id);
            let order = self.order_mut(id);
            order.price = new_price;
            order.volume = new_volume;
            order.stamp = clock.tick();
            self.ladder_mut(side).insert(new_price, id);
        } else if new_volume < old_volume {
            self.order_mut(id).volume = new_volume;
        }
        // Same price, same volume: nothing to restructure.

        self.match_crossing(id, side, clock);
        Ok(())
    }

    /// Cancel an order: mark it, pull it from its ladder, keep the
    /// tombstone in the id index. No matching runs — removing liquidity
    /// cannot create a cross.
    pub fn cancel(&mut self, id: OrderId) -> Result<()> {
        let order = self
            .orders
            .get_mut(&id)
            .ok_or(MatchbookError::OrderNotFound(id))?;
        order.cancelled = true;
        let side = order.side;
        let price = order.price;
        self.ladder_mut(side).remove(price, id);
        Ok(())
    }

    // =================================================================
    // Queries
    // =================================================================

    /// All trades emitted by this book, in fill order.
    #[must_use]
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Look up an order by id (live or tombstone).
    #[must_use]
    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    /// Whether this book has ever admitted the given id.
    #[must_use]
    pub fn contains_order(&self, id: OrderId) -> bool {
        self.orders.contains_key(&id)
    }

    /// Orders ever admitted, tombstones included.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Best (highest) bid price, or `None` if no bids rest.
    #[must_use]
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.best_price()
    }

    /// Best (lowest) ask price, or `None` if no asks rest.
    #[must_use]
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.best_price()
    }

    /// A book is crossed when its best bid would trade against its best
    /// ask. This never holds at rest.
    #[must_use]
    pub fn is_crossed(&self) -> bool {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => bid >= ask,
            _ => false,
        }
    }

    /// Live resting orders on one side, in priority order.
    pub fn live_orders(&self, side: Side) -> impl Iterator<Item = &Order> + '_ {
        self.ladder(side)
            .iter_priority()
            .map(move |id| self.order_expect(id))
    }

    /// Resting volume aggregated by price, **descending** price order for
    /// both sides — the order the snapshot report emits levels in.
    #[must_use]
    pub fn price_levels(&self, side: Side) -> Vec<LevelSummary> {
        let ladder = self.ladder(side);
        let mut summaries: Vec<LevelSummary> = ladder
            .iter_levels()
            .map(|level| LevelSummary {
                price: level.price,
                volume: level
                    .iter()
                    .map(|id| self.order_expect(id))
                    .filter(|order| order.is_live())
                    .map(|order| order.volume)
                    .sum(),
            })
            .filter(|summary| summary.volume > 0)
            .collect();
        summaries.reverse();
        summaries
    }

    // =================================================================
    // Internal
    // =================================================================

    /// Resolve an id that the ladder claims is resting. A miss means the
    /// ladder and the id index disagree — corrupt state, so abort.
    pub(crate) fn order_expect(&self, id: OrderId) -> &Order {
        self.orders
            .get(&id)
            .expect("ladder references an order missing from the id index")
    }

    pub(crate) fn order_mut(&mut self, id: OrderId) -> &mut Order {
        self.orders
            .get_mut(&id)
            .expect("ladder references an order missing from the id index")
    }
}
