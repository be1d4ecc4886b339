//! The book registry and operation dispatcher.
//!
//! One [`Engine`] holds every symbol's [`OrderBook`] plus a global
//! id-to-symbol index. UPDATE and CANCEL lines carry no symbol, so the index
//! is what routes them to the right book in O(1) instead of scanning the
//! registry. Ids are globally unique for the run, so an id maps to at most
//! one book for its lifetime.
//!
//! Books are created lazily on the first INSERT for a symbol and never
//! removed — the snapshot emits a section for every symbol that ever had a
//! book, even if it drained empty.

use std::collections::{BTreeMap, HashMap};

use matchbook_matchcore::{OrderBook, SeqClock};
use matchbook_types::{
    EngineConfig, MatchbookError, Operation, Order, OrderId, Result, Symbol,
};
use rust_decimal::Decimal;
use tracing::{debug, error};

/// The registry of per-symbol books and the operation entry point.
#[derive(Debug)]
pub struct Engine {
    /// Books keyed by symbol; `BTreeMap` keeps the snapshot's ascending
    /// symbol order free.
    books: BTreeMap<Symbol, OrderBook>,
    /// Which book owns each id ever inserted.
    owners: HashMap<OrderId, Symbol>,
    /// Shared stamp source for order priority and trade sequence.
    clock: SeqClock,
    config: EngineConfig,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            books: BTreeMap::new(),
            owners: HashMap::with_capacity(config.order_index_capacity),
            clock: SeqClock::new(),
            config,
        }
    }

    // =================================================================
    // Operation intake
    // =================================================================

    /// Parse and apply one operation line. Parse failures are no-ops.
    pub fn apply_line(&mut self, line: &str) {
        match line.parse::<Operation>() {
            Ok(op) => self.apply(op),
            Err(err) => self.reject(&err),
        }
    }

    /// Apply an already-parsed operation. Expected rejections (unknown id,
    /// duplicate id, dead order, non-positive volume) are no-ops.
    pub fn apply(&mut self, op: Operation) {
        let outcome = match op {
            Operation::Insert {
                id,
                symbol,
                side,
                price,
                volume,
            } => self.insert(Order::new(id, symbol, side, price, volume)),
            Operation::Update { id, price, volume } => self.update(id, price, volume),
            Operation::Cancel { id } => self.cancel(id),
        };
        if let Err(err) = outcome {
            self.reject(&err);
        }
    }

    fn insert(&mut self, order: Order) -> Result<()> {
        if self.owners.contains_key(&order.id) {
            return Err(MatchbookError::DuplicateOrder(order.id));
        }

        let id = order.id;
        let symbol = order.symbol.clone();
        let book = self
            .books
            .entry(symbol.clone())
            .or_insert_with(|| OrderBook::new(symbol.clone()));
        book.insert(order, &mut self.clock)?;
        self.owners.insert(id, symbol);
        Ok(())
    }

    fn update(&mut self, id: OrderId, price: Decimal, volume: i64) -> Result<()> {
        let symbol = self
            .owners
            .get(&id)
            .ok_or(MatchbookError::OrderNotFound(id))?;
        let book = self
            .books
            .get_mut(symbol)
            .expect("owner index references a symbol with no book");
        book.update(id, price, volume, &mut self.clock)
    }

    fn cancel(&mut self, id: OrderId) -> Result<()> {
        let symbol = self
            .owners
            .get(&id)
            .ok_or(MatchbookError::OrderNotFound(id))?;
        let book = self
            .books
            .get_mut(symbol)
            .expect("owner index references a symbol with no book");
        book.cancel(id)
    }

    /// Diagnostic sink for the silent no-op classes. Never alters output.
    fn reject(&self, err: &MatchbookError) {
        if !err.is_silent_noop() {
            error!(%err, "unrecoverable engine error");
            panic!("{err}");
        }
        if self.config.log_rejects {
            debug!(%err, "operation discarded");
        }
    }

    // =================================================================
    // Queries
    // =================================================================

    /// The book for a symbol, if any INSERT ever referenced it.
    #[must_use]
    pub fn book(&self, symbol: &Symbol) -> Option<&OrderBook> {
        self.books.get(symbol)
    }

    /// All books in ascending symbol order.
    pub fn books(&self) -> impl Iterator<Item = &OrderBook> {
        self.books.values()
    }

    /// Number of symbols that ever had a book.
    #[must_use]
    pub fn book_count(&self) -> usize {
        self.books.len()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
