//! Trade-log digest for determinism verification.
//!
//! The engine is deterministic: the same operation stream must produce the
//! same trades in the same order. The trade root is a single hash over the
//! log's canonical content that makes "same result" checks cheap in tests
//! and replay tooling. Wall-clock fields are excluded — only data that must
//! be reproducible is hashed.

use matchbook_types::{format_price, Trade};
use sha2::{Digest, Sha256};

/// Compute the root hash over a trade log.
///
/// The same trades in the same order always produce the same root.
#[must_use]
pub fn compute_trade_root(trades: &[Trade]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"matchbook:trade_root:v1:");
    hasher.update((trades.len() as u64).to_le_bytes());

    for trade in trades {
        hasher.update(trade.symbol.as_str().as_bytes());
        hasher.update(format_price(trade.price).as_bytes());
        hasher.update(trade.volume.to_le_bytes());
        hasher.update(trade.taker_order_id.0.to_le_bytes());
        hasher.update(trade.maker_order_id.0.to_le_bytes());
        hasher.update(trade.seq.to_le_bytes());
    }

    hasher.finalize().into()
}

/// Recompute the root from `trades` and compare with `expected_root`.
#[must_use]
pub fn verify_trade_root(trades: &[Trade], expected_root: &[u8; 32]) -> bool {
    compute_trade_root(trades) == *expected_root
}
