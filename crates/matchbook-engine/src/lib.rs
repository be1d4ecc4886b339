//! # matchbook-engine
//!
//! The outermost layer of the **matchbook** matching engine: the per-symbol
//! book registry, operation dispatch, and report rendering.
//!
//! The single entry point for driver programs is [`run`]: feed it operation
//! lines, get back trade lines followed by the per-symbol residual-liquidity
//! snapshot. Malformed or inapplicable operations are silent no-ops
//! (surfaced only as `tracing` diagnostics), so [`run`] always produces
//! output.
//!
//! ```
//! use matchbook_engine::run;
//!
//! let output = run([
//!     "INSERT,1,FFLY,SELL,12.2,5",
//!     "INSERT,2,FFLY,SELL,12.1,8",
//!     "INSERT,3,FFLY,BUY,12.5,10",
//! ]);
//! assert_eq!(
//!     output,
//!     vec!["FFLY,12.1,8,3,2", "FFLY,12.2,2,3,1", "===FFLY===", "SELL,12.2,3"],
//! );
//! ```

pub mod engine;
pub mod report;

pub use engine::Engine;

/// Process an operation stream and render the full output: every trade in
/// chronological fill order, then the residual book snapshot per symbol.
pub fn run<I, S>(operations: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut engine = Engine::new();
    for line in operations {
        engine.apply_line(line.as_ref());
    }
    engine.render()
}
