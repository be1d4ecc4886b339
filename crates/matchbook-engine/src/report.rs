//! Output assembly.
//!
//! The report has two parts, in order:
//!
//! 1. Every trade, one line each, in chronological fill order — across all
//!    symbols, merged by the global fill sequence.
//! 2. Per symbol in ascending lexicographic order: a `===SYMBOL===`
//!    separator, then residual SELL levels by descending price, then
//!    residual BUY levels by descending price. Levels aggregate live volume
//!    at a price; empty levels are omitted.

use matchbook_matchcore::compute_trade_root;
use matchbook_types::{format_price, Side, Trade};

use crate::Engine;

impl Engine {
    /// All emitted trades, merged across books into fill order.
    #[must_use]
    pub fn chronological_trades(&self) -> Vec<Trade> {
        let mut trades: Vec<Trade> = self
            .books()
            .flat_map(|book| book.trades().iter().cloned())
            .collect();
        trades.sort_by_key(|trade| trade.seq);
        trades
    }

    /// Deterministic digest of the chronological trade log.
    #[must_use]
    pub fn trade_root(&self) -> [u8; 32] {
        compute_trade_root(&self.chronological_trades())
    }

    /// Render the complete report: trade lines, then the per-symbol
    /// snapshot of residual resting liquidity.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .chronological_trades()
            .iter()
            .map(ToString::to_string)
            .collect();

        for book in self.books() {
            lines.push(format!("==={}===", book.symbol()));
            for level in book.price_levels(Side::Sell) {
                lines.push(format!(
                    "SELL,{},{}",
                    format_price(level.price),
                    level.volume
                ));
            }
            for level in book.price_levels(Side::Buy) {
                lines.push(format!(
                    "BUY,{},{}",
                    format_price(level.price),
                    level.volume
                ));
            }
        }

        lines
    }
}
