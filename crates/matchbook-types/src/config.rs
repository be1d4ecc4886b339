//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Tunables for a single engine instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Pre-allocated capacity of the global id-to-symbol index.
    pub order_index_capacity: usize,
    /// Emit a `tracing` event for every operation rejected as a no-op.
    pub log_rejects: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            order_index_capacity: constants::DEFAULT_ORDER_INDEX_CAPACITY,
            log_rejects: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_come_from_constants() {
        let cfg = EngineConfig::default();
        assert_eq!(
            cfg.order_index_capacity,
            constants::DEFAULT_ORDER_INDEX_CAPACITY
        );
        assert!(cfg.log_rejects);
    }

    #[test]
    fn serde_roundtrip() {
        let cfg = EngineConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.order_index_capacity, back.order_index_capacity);
        assert_eq!(cfg.log_rejects, back.log_rejects);
    }
}
