//! Instrument registry: dense id -> (name, ticker), one `OrderBook` each.

use std::sync::{Mutex, RwLock};

use crate::book::OrderBook;
use crate::error::EngineError;

/// A listed, tradable symbol. Immutable after creation.
#[derive(Debug, Clone)]
pub struct Instrument {
    pub id: u64,
    pub name: String,
    pub ticker: String,
}

struct InstrumentEntry {
    instrument: Instrument,
    book: Mutex<OrderBook>,
}

/// Dense id -> instrument + book, in insertion order. Reading an existing
/// entry (the common case: placing/quoting against an already-registered
/// instrument) only needs the registry's read lock; registering a new
/// instrument takes the write lock once.
#[derive(Default)]
pub struct InstrumentRegistry {
    entries: RwLock<Vec<InstrumentEntry>>,
}

impl InstrumentRegistry {
    pub fn new() -> Self {
        InstrumentRegistry {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Assigns the next dense id (= current count), creates an empty book.
    /// Always succeeds; duplicate names/tickers are permitted.
    pub fn add_instrument(&self, name: impl Into<String>, ticker: impl Into<String>) -> u64 {
        let mut entries = self.entries.write().unwrap();
        let id = entries.len() as u64;
        entries.push(InstrumentEntry {
            instrument: Instrument {
                id,
                name: name.into(),
                ticker: ticker.into(),
            },
            book: Mutex::new(OrderBook::new()),
        });
        id
    }

    pub fn count(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn name(&self, id: u64) -> Result<String, EngineError> {
        self.entries
            .read()
            .unwrap()
            .get(id as usize)
            .map(|e| e.instrument.name.clone())
            .ok_or(EngineError::UnknownInstrument)
    }

    pub fn ticker(&self, id: u64) -> Result<String, EngineError> {
        self.entries
            .read()
            .unwrap()
            .get(id as usize)
            .map(|e| e.instrument.ticker.clone())
            .ok_or(EngineError::UnknownInstrument)
    }

    /// Runs `f` against the locked book for `id`. `None` if `id` is not
    /// registered; the closure never runs in that case.
    pub fn with_book<T>(&self, id: u64, f: impl FnOnce(&mut OrderBook) -> T) -> Option<T> {
        let entries = self.entries.read().unwrap();
        let entry = entries.get(id as usize)?;
        let mut book = entry.book.lock().unwrap();
        Some(f(&mut book))
    }
}
