//! Trade records emitted by the matching loop.
//!
//! A [`Trade`] is the immutable record of one fill between a taker (the
//! order whose admission or repricing initiated the match) and a maker (the
//! order already resting in the book). The execution price is always the
//! maker's resting price.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{format_price, OrderId, Symbol};

/// One fill between a taker and a maker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    /// The symbol the fill occurred in.
    pub symbol: Symbol,
    /// Execution price (the maker's resting price).
    pub price: Decimal,
    /// Executed volume in units.
    pub volume: u64,
    /// The initiating (aggressive) order.
    pub taker_order_id: OrderId,
    /// The resting (passive) order.
    pub maker_order_id: OrderId,
    /// Global fill sequence; strictly increasing across all books.
    pub seq: u64,
    /// Wall-clock time of the fill, for diagnostics only.
    pub executed_at: DateTime<Utc>,
}

impl std::fmt::Display for Trade {
    /// Renders the wire-format trade line:
    /// `<symbol>,<price>,<volume>,<taker_order_id>,<maker_order_id>`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.symbol,
            format_price(self.price),
            self.volume,
            self.taker_order_id,
            self.maker_order_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    fn make_trade(price: &str, volume: u64) -> Trade {
        Trade {
            symbol: Symbol::from("FFLY"),
            price: Decimal::from_str(price).unwrap(),
            volume,
            taker_order_id: OrderId(3),
            maker_order_id: OrderId(2),
            seq: 0,
            executed_at: Utc::now(),
        }
    }

    #[test]
    fn display_matches_wire_format() {
        let t = make_trade("12.1", 8);
        assert_eq!(t.to_string(), "FFLY,12.1,8,3,2");
    }

    #[test]
    fn display_trims_trailing_zeros() {
        let t = make_trade("23.4500", 10);
        assert_eq!(t.to_string(), "FFLY,23.45,10,3,2");
        let t = make_trade("47.00", 5);
        assert_eq!(t.to_string(), "FFLY,47,5,3,2");
    }

    #[test]
    fn serde_roundtrip() {
        let t = make_trade("0.3854", 4);
        let json = serde_json::to_string(&t).unwrap();
        let back: Trade = serde_json::from_str(&json).unwrap();
        assert_eq!(t.price, back.price);
        assert_eq!(t.volume, back.volume);
        assert_eq!(t.taker_order_id, back.taker_order_id);
        assert_eq!(t.maker_order_id, back.maker_order_id);
        assert_eq!(t.seq, back.seq);
    }
}
