//! One side's priority structure.
//!
//! A [`Ladder`] keys price levels in a `BTreeMap<Decimal, PriceLevel>`. Best
//! price is the highest key for the buy side and the lowest for the sell
//! side; within a level the FIFO chain supplies the time tie-break, so the
//! structure's comparator is a total order over `(price, stamp)`.
//!
//! Empty levels are dropped eagerly — a level key present in the map always
//! has at least one resting order.

use std::collections::BTreeMap;

use matchbook_types::{OrderId, Side};
use rust_decimal::Decimal;

use crate::price_level::PriceLevel;

/// Priority structure for one side of a book.
#[derive(Debug, Clone)]
pub struct Ladder {
    side: Side,
    levels: BTreeMap<Decimal, PriceLevel>,
    /// Total resting orders across all levels.
    len: usize,
}

impl Ladder {
    #[must_use]
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
            len: 0,
        }
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Add an order id at its price, behind every order already resting
    /// there.
    pub fn insert(&mut self, price: Decimal, id: OrderId) {
        self.levels
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price))
            .push_back(id);
        self.len += 1;
    }

    /// The best level for this side: highest price for buys, lowest for
    /// sells.
    fn best_level(&self) -> Option<&PriceLevel> {
        match self.side {
            Side::Buy => self.levels.values().next_back(),
            Side::Sell => self.levels.values().next(),
        }
    }

    /// The id at the top of the book: best price, earliest arrival.
    #[must_use]
    pub fn best(&self) -> Option<OrderId> {
        self.best_level().and_then(PriceLevel::front)
    }

    /// The best resting price, if any.
    #[must_use]
    pub fn best_price(&self) -> Option<Decimal> {
        self.best_level().map(|level| level.price)
    }

    /// Remove and return the top-of-book id.
    pub fn pop_best(&mut self) -> Option<OrderId> {
        let price = self.best_price()?;
        let level = self.levels.get_mut(&price)?;
        let id = level.pop_front();
        if level.is_empty() {
            self.levels.remove(&price);
        }
        if id.is_some() {
            self.len -= 1;
        }
        id
    }

    /// Remove a specific order regardless of position. Returns `true` if it
    /// was resting at `price`.
    pub fn remove(&mut self, price: Decimal, id: OrderId) -> bool {
        let Some(level) = self.levels.get_mut(&price) else {
            return false;
        };
        let removed = level.remove(id);
        if removed {
            self.len -= 1;
            if level.is_empty() {
                self.levels.remove(&price);
            }
        }
        removed
    }

    /// Iterate levels in ascending price order.
    pub fn iter_levels(&self) -> impl Iterator<Item = &PriceLevel> {
        self.levels.values()
    }

    /// Iterate every resting id in priority order (best level first, FIFO
    /// within a level).
    pub fn iter_priority(&self) -> Box<dyn Iterator<Item = OrderId> + '_> {
        match self.side {
            Side::Buy => Box::new(self.levels.values().rev().flat_map(PriceLevel::iter)),
            Side::Sell => Box::new(self.levels.values().flat_map(PriceLevel::iter)),
        }
    }

    /// Number of distinct price levels.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Total resting orders on this side.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    fn dec(raw: &str) -> Decimal {
        Decimal::from_str(raw).unwrap()
    }

    #[test]
    fn buy_side_best_is_highest_price() {
        let mut ladder = Ladder::new(Side::Buy);
        ladder.insert(dec("14.23"), OrderId(5));
        ladder.insert(dec("14.235"), OrderId(1));
        ladder.insert(dec("14.234"), OrderId(4));

        assert_eq!(ladder.best(), Some(OrderId(1)));
        assert_eq!(ladder.best_price(), Some(dec("14.235")));
    }

    #[test]
    fn sell_side_best_is_lowest_price() {
        let mut ladder = Ladder::new(Side::Sell);
        ladder.insert(dec("12.2"), OrderId(1));
        ladder.insert(dec("12.1"), OrderId(2));

        assert_eq!(ladder.best(), Some(OrderId(2)));
        assert_eq!(ladder.best_price(), Some(dec("12.1")));
    }

    #[test]
    fn equal_price_ties_break_by_arrival() {
        let mut ladder = Ladder::new(Side::Buy);
        ladder.insert(dec("47"), OrderId(1));
        ladder.insert(dec("47"), OrderId(2));

        assert_eq!(ladder.best(), Some(OrderId(1)));
        assert_eq!(ladder.pop_best(), Some(OrderId(1)));
        assert_eq!(ladder.best(), Some(OrderId(2)));
    }

    #[test]
    fn numeric_price_equality_shares_a_level() {
        let mut ladder = Ladder::new(Side::Sell);
        ladder.insert(dec("46"), OrderId(1));
        ladder.insert(dec("46.00"), OrderId(2));

        assert_eq!(ladder.depth(), 1);
        assert_eq!(ladder.pop_best(), Some(OrderId(1)));
        assert_eq!(ladder.pop_best(), Some(OrderId(2)));
    }

    #[test]
    fn pop_best_drops_empty_level() {
        let mut ladder = Ladder::new(Side::Sell);
        ladder.insert(dec("12.1"), OrderId(1));
        ladder.insert(dec("12.2"), OrderId(2));

        assert_eq!(ladder.pop_best(), Some(OrderId(1)));
        assert_eq!(ladder.depth(), 1);
        assert_eq!(ladder.best_price(), Some(dec("12.2")));
    }

    #[test]
    fn remove_by_id_regardless_of_position() {
        let mut ladder = Ladder::new(Side::Buy);
        ladder.insert(dec("47"), OrderId(1));
        ladder.insert(dec("47"), OrderId(2));
        ladder.insert(dec("46"), OrderId(3));

        assert!(ladder.remove(dec("47"), OrderId(2)));
        assert!(!ladder.remove(dec("47"), OrderId(2)));
        assert!(!ladder.remove(dec("45"), OrderId(3)));
        assert_eq!(ladder.len(), 2);
        assert_eq!(ladder.best(), Some(OrderId(1)));
    }

    #[test]
    fn priority_iteration_order() {
        let mut ladder = Ladder::new(Side::Buy);
        ladder.insert(dec("14.235"), OrderId(1));
        ladder.insert(dec("14.235"), OrderId(2));
        ladder.insert(dec("14.234"), OrderId(4));
        ladder.insert(dec("14.23"), OrderId(5));

        let ids: Vec<OrderId> = ladder.iter_priority().collect();
        assert_eq!(ids, vec![OrderId(1), OrderId(2), OrderId(4), OrderId(5)]);
    }

    #[test]
    fn empty_ladder() {
        let ladder = Ladder::new(Side::Sell);
        assert_eq!(ladder.side(), Side::Sell);
        assert!(ladder.is_empty());
        assert_eq!(ladder.best(), None);
        assert_eq!(ladder.best_price(), None);
        assert_eq!(ladder.depth(), 0);
    }
}
