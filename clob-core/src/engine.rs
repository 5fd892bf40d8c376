//! The matching engine façade: combines the instrument registry, the global
//! order arena, and the injected clock; dispatches Place/Cancel/Query/Quote.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::arena::OrderArena;
use crate::clock::{Clock, SystemClock};
use crate::error::EngineError;
use crate::instrument::InstrumentRegistry;
use crate::types::{decode_index, decode_side_and_index, encode_id, OrderId, OrderSnapshot, Side};

/// Ties together everything Place/Cancel/Query/Quote need.
///
/// Order ids are dense within each side *process-wide*, not per instrument
/// (`§3` requires a top-bit-disambiguated id space shared by every book), so
/// the arena is a single pair of vectors guarded by one mutex, while each
/// instrument gets its own book mutex. A Place that touches both always
/// locks the registry's book first and the arena second; Cancel/Query only
/// ever take the arena lock alone, so the two never form a cycle.
pub struct MatchingEngine<C: Clock = SystemClock> {
    registry: InstrumentRegistry,
    arena: Mutex<OrderArena>,
    clock: C,
    last_ts: AtomicU64,
}

impl MatchingEngine<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for MatchingEngine<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> MatchingEngine<C> {
    pub fn with_clock(clock: C) -> Self {
        MatchingEngine {
            registry: InstrumentRegistry::new(),
            arena: Mutex::new(OrderArena::new()),
            clock,
            last_ts: AtomicU64::new(0),
        }
    }

    /// Reads the injected clock and clamps to strictly increasing, per the
    /// "clock as side effect" design note: `ts = max(prev_ts + 1, now())`.
    fn next_timestamp(&self) -> u64 {
        loop {
            let now = self.clock.now_ns();
            let prev = self.last_ts.load(Ordering::Acquire);
            let candidate = now.max(prev.saturating_add(1));
            if self
                .last_ts
                .compare_exchange_weak(prev, candidate, Ordering::AcqRel, Ordering::Relaxed)
                .is_ok()
            {
                return candidate;
            }
        }
    }

    pub fn add_instrument(&self, name: impl Into<String>, ticker: impl Into<String>) -> u64 {
        let name = name.into();
        let ticker = ticker.into();
        let id = self.registry.add_instrument(name.clone(), ticker.clone());
        tracing::debug!(instrument_id = id, name = %name, ticker = %ticker, "instrument registered");
        id
    }

    pub fn registry(&self) -> &InstrumentRegistry {
        &self.registry
    }

    /// Appends the order to the arena and, if `instrument_id` is registered,
    /// runs it through that instrument's matching loop. An unregistered
    /// instrument gets the order inserted pre-cancelled, preserving
    /// id-space contiguity (spec'd behaviour, not a bug: see `DESIGN.md`).
    ///
    /// Fails with `EngineError::Internal` if the matching cascade hits an
    /// accounting overflow partway through; per spec.md §7 this is fatal
    /// and must not be reported to the caller as a successful placement.
    pub fn place_order(
        &self,
        side: Side,
        instrument_id: u64,
        price: u64,
        quantity: u64,
    ) -> Result<OrderId, EngineError> {
        let timestamp_ns = self.next_timestamp();

        let placed = self.registry.with_book(instrument_id, |book| -> Result<OrderId, EngineError> {
            let index = {
                let mut arena = self.arena.lock().unwrap();
                arena.push(side, timestamp_ns, price, quantity)
            };
            let order_id = encode_id(side, index);
            let mut trades = Vec::new();
            crate::matching::place_and_match(book, &self.arena, side, index, timestamp_ns, &mut trades)
                .inspect_err(|err| tracing::error!(?err, order_id, "matching loop aborted"))?;
            tracing::trace!(order_id, fills = trades.len() / 2, "order placed");
            Ok(order_id)
        });

        match placed {
            Some(result) => result,
            None => {
                let mut arena = self.arena.lock().unwrap();
                let index = arena.push(side, timestamp_ns, price, quantity);
                let order_id = encode_id(side, index);
                arena.cancel(side, index);
                tracing::debug!(order_id, instrument_id, "place against unknown instrument; order cancelled");
                Ok(order_id)
            }
        }
    }

    /// `false` for an unknown id or an already-terminal order; `true` on an
    /// actual cancellation.
    pub fn cancel_order(&self, side: Side, order_id: OrderId) -> bool {
        let index = decode_index(side, order_id);
        let mut arena = self.arena.lock().unwrap();
        let cancelled = arena.cancel(side, index);
        tracing::trace!(order_id, cancelled, "cancel");
        cancelled
    }

    /// Tolerant counterpart to `cancel_order` for callers that only have the
    /// raw id: disambiguates side from `ASK_FLAG`, per spec.md §3.
    pub fn cancel_order_by_id(&self, order_id: OrderId) -> bool {
        let (side, _) = decode_side_and_index(order_id);
        self.cancel_order(side, order_id)
    }

    pub fn query_order(&self, side: Side, order_id: OrderId) -> OrderSnapshot {
        let index = decode_index(side, order_id);
        let arena = self.arena.lock().unwrap();
        arena
            .query(side, order_id, index)
            .unwrap_or_else(|| OrderSnapshot::not_found(order_id))
    }

    /// Tolerant counterpart to `query_order` for callers that only have the
    /// raw id: disambiguates side from `ASK_FLAG`, per spec.md §3.
    pub fn query_order_by_id(&self, order_id: OrderId) -> OrderSnapshot {
        let (side, _) = decode_side_and_index(order_id);
        self.query_order(side, order_id)
    }

    /// `None` if `instrument_id` is not registered.
    pub fn quote_best_bid_ask(&self, instrument_id: u64) -> Option<(u64, u64)> {
        self.registry.with_book(instrument_id, |book| {
            let arena = self.arena.lock().unwrap();
            book.best_bid_ask(&arena)
        })
    }
}
