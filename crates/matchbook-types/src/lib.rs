//! # matchbook-types
//!
//! Shared types, errors, and configuration for the **matchbook** matching
//! engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`OrderId`], [`Symbol`]
//! - **Order model**: [`Order`], [`Side`]
//! - **Trade model**: [`Trade`]
//! - **Operation model**: [`Operation`] and the comma-separated line grammar
//! - **Price handling**: [`parse_price`], [`format_price`]
//! - **Configuration**: [`EngineConfig`]
//! - **Errors**: [`MatchbookError`] with `MB_ERR_` prefix codes

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod operation;
pub mod order;
pub mod price;
pub mod trade;

// Re-export all primary types at crate root for ergonomic imports:
//   use matchbook_types::{Order, Side, Trade, Operation, ...};

pub use config::*;
pub use error::*;
pub use ids::*;
pub use operation::*;
pub use order::*;
pub use price::*;
pub use trade::*;

// Constants are accessed via `matchbook_types::constants::FOO`
// (not re-exported to avoid name collisions).
