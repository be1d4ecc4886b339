//! Error types for the matchbook matching engine.
//!
//! All errors use the `MB_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Order errors (the silent no-op class — the engine downgrades these
//!   to diagnostics and continues)
//! - 2xx: Operation parse errors (malformed lines, also silent no-ops)
//! - 9xx: General / internal errors

use thiserror::Error;

use crate::OrderId;

/// Central error enum for all matchbook operations.
#[derive(Debug, Error)]
pub enum MatchbookError {
    // =================================================================
    // Order Errors (1xx)
    // =================================================================
    /// The requested order is not known to any book.
    #[error("MB_ERR_100: Order not found: {0}")]
    OrderNotFound(OrderId),

    /// An order with this id already exists.
    #[error("MB_ERR_101: Order already exists: {0}")]
    DuplicateOrder(OrderId),

    /// The order exists but is cancelled or fully filled.
    #[error("MB_ERR_102: Order no longer live: {0}")]
    OrderNotLive(OrderId),

    /// An update carried a zero or negative volume; discarded, not a cancel.
    #[error("MB_ERR_103: Non-positive update volume {volume} for order {id}")]
    VolumeNotPositive { id: OrderId, volume: i64 },

    // =================================================================
    // Operation Parse Errors (2xx)
    // =================================================================
    /// The line did not match any operation's field layout.
    #[error("MB_ERR_200: Malformed operation line: {line:?}")]
    MalformedLine { line: String },

    /// The leading token was not INSERT, UPDATE, or CANCEL.
    #[error("MB_ERR_201: Unknown operation: {token:?}")]
    UnknownOperation { token: String },

    /// The price field was not a positive decimal with at most four
    /// fractional digits.
    #[error("MB_ERR_202: Invalid price: {raw:?}")]
    InvalidPrice { raw: String },

    /// The side field was neither BUY nor SELL.
    #[error("MB_ERR_203: Invalid side: {raw:?}")]
    InvalidSide { raw: String },

    /// A numeric field (id or volume) failed to parse.
    #[error("MB_ERR_204: Invalid {field} field: {raw:?}")]
    InvalidField { field: &'static str, raw: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error (invariant violation).
    #[error("MB_ERR_900: Internal error: {0}")]
    Internal(String),
}

impl MatchbookError {
    /// Whether this error belongs to the expected-rejection classes that the
    /// engine swallows as silent no-ops. Internal errors are not recoverable.
    #[must_use]
    pub fn is_silent_noop(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, MatchbookError>;
