//! A single price level in a ladder.
//!
//! Orders at the same price queue in FIFO order (time priority) in a
//! [`VecDeque`]. The level stores order ids only; the records themselves are
//! owned by the book's id index.

use std::collections::VecDeque;

use matchbook_types::OrderId;
use rust_decimal::Decimal;

/// All orders resting at one price, front = oldest = highest priority.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    /// The price at this level.
    pub price: Decimal,
    /// Order ids in time-priority order.
    orders: VecDeque<OrderId>,
}

impl PriceLevel {
    #[must_use]
    pub fn new(price: Decimal) -> Self {
        Self {
            price,
            orders: VecDeque::new(),
        }
    }

    /// Add an order at the back of the queue (lowest time priority).
    pub fn push_back(&mut self, id: OrderId) {
        self.orders.push_back(id);
    }

    /// Remove and return the front (highest priority) order id.
    pub fn pop_front(&mut self) -> Option<OrderId> {
        self.orders.pop_front()
    }

    /// Peek at the front order id without removing it.
    #[must_use]
    pub fn front(&self) -> Option<OrderId> {
        self.orders.front().copied()
    }

    /// Remove a specific order id. Returns `true` if it was present.
    pub fn remove(&mut self, id: OrderId) -> bool {
        match self.orders.iter().position(|&o| o == id) {
            Some(pos) => {
                self.orders.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Iterate ids in time-priority order.
    pub fn iter(&self) -> impl Iterator<Item = OrderId> + '_ {
        self.orders.iter().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    fn level() -> PriceLevel {
        PriceLevel::new(Decimal::from_str("14.235").unwrap())
    }

    #[test]
    fn fifo_order() {
        let mut lvl = level();
        lvl.push_back(OrderId(1));
        lvl.push_back(OrderId(2));
        lvl.push_back(OrderId(3));

        assert_eq!(lvl.front(), Some(OrderId(1)));
        assert_eq!(lvl.pop_front(), Some(OrderId(1)));
        assert_eq!(lvl.pop_front(), Some(OrderId(2)));
        assert_eq!(lvl.len(), 1);
    }

    #[test]
    fn remove_from_middle_preserves_order() {
        let mut lvl = level();
        lvl.push_back(OrderId(1));
        lvl.push_back(OrderId(2));
        lvl.push_back(OrderId(3));

        assert!(lvl.remove(OrderId(2)));
        let ids: Vec<OrderId> = lvl.iter().collect();
        assert_eq!(ids, vec![OrderId(1), OrderId(3)]);
    }

    #[test]
    fn remove_missing_id() {
        let mut lvl = level();
        lvl.push_back(OrderId(1));
        assert!(!lvl.remove(OrderId(9)));
        assert_eq!(lvl.len(), 1);
    }

    #[test]
    fn empty_level() {
        let lvl = level();
        assert!(lvl.is_empty());
        assert_eq!(lvl.front(), None);
    }
}
