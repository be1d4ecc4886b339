//! Order types for the matchbook matching engine.
//!
//! An [`Order`] is owned by exactly one book for its whole lifetime. Once its
//! volume reaches zero or it is cancelled it stays in the book's id index as
//! a tombstone so later UPDATE/CANCEL lines referencing it become no-ops.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{MatchbookError, OrderId, Symbol};

/// Which side of the book an order is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Returns the opposite side.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for Side {
    type Err = MatchbookError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            _ => Err(MatchbookError::InvalidSide {
                raw: raw.to_string(),
            }),
        }
    }
}

/// A resting limit order.
///
/// `stamp` is the priority sequence assigned by the engine clock when the
/// order entered its side structure; a reprioritizing update refreshes it.
/// Ties at the same price resolve to the smaller stamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub symbol: Symbol,
    pub side: Side,
    pub price: Decimal,
    pub volume: u64,
    pub stamp: u64,
    pub cancelled: bool,
    pub created_at: DateTime<Utc>,
}

impl Order {
    #[must_use]
    pub fn new(id: OrderId, symbol: Symbol, side: Side, price: Decimal, volume: u64) -> Self {
        Self {
            id,
            symbol,
            side,
            price,
            volume,
            stamp: 0,
            cancelled: false,
            created_at: Utc::now(),
        }
    }

    /// A live order is present in its side structure and eligible to match.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.volume > 0 && !self.cancelled
    }

    /// Consume up to `qty` units; returns the quantity actually filled.
    pub fn fill(&mut self, qty: u64) -> u64 {
        let filled = qty.min(self.volume);
        self.volume -= filled;
        filled
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Order {}
