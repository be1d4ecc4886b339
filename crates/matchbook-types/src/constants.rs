//! System-wide constants for the matchbook matching engine.

/// Maximum number of fractional digits a price may carry on the wire.
pub const MAX_PRICE_SCALE: u32 = 4;

/// Default pre-allocated capacity for the global order index.
pub const DEFAULT_ORDER_INDEX_CAPACITY: usize = 1024;

/// Default pre-allocated capacity for a book's trade log.
pub const DEFAULT_TRADE_LOG_CAPACITY: usize = 256;

/// Number of fields in an INSERT operation line.
pub const INSERT_FIELD_COUNT: usize = 6;

/// Number of fields in an UPDATE operation line.
pub const UPDATE_FIELD_COUNT: usize = 4;

/// Number of fields in a CANCEL operation line.
pub const CANCEL_FIELD_COUNT: usize = 2;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "matchbook";
