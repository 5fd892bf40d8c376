//! Per-instrument order book: two binary-heap priority queues of
//! back-references into the arena, with lazy deletion of stale tops.
//!
//! `std::collections::BinaryHeap` is a max-heap, so `BidEntry`/`AskEntry`
//! each carry an `Ord` tuned so that `peek`/`pop` surface the best resting
//! order for that side: highest price first for bids, lowest price first
//! for asks, earliest `timestamp_ns` breaking ties either way.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::arena::OrderArena;
use crate::types::{ArenaIndex, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BidEntry {
    pub price: u64,
    pub timestamp_ns: u64,
    pub index: ArenaIndex,
}

impl Ord for BidEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.price
            .cmp(&other.price)
            .then_with(|| other.timestamp_ns.cmp(&self.timestamp_ns))
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for BidEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AskEntry {
    pub price: u64,
    pub timestamp_ns: u64,
    pub index: ArenaIndex,
}

impl Ord for AskEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .price
            .cmp(&self.price)
            .then_with(|| other.timestamp_ns.cmp(&self.timestamp_ns))
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for AskEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The two resting-order heaps for one instrument. Holds no order state
/// itself; every field read through an entry goes back through the arena.
#[derive(Debug, Default)]
pub struct OrderBook {
    pub(crate) bids: BinaryHeap<BidEntry>,
    pub(crate) asks: BinaryHeap<AskEntry>,
}

impl OrderBook {
    pub fn new() -> Self {
        OrderBook {
            bids: BinaryHeap::new(),
            asks: BinaryHeap::new(),
        }
    }

    /// `(price, timestamp_ns, index)` of the current top, without popping.
    pub(crate) fn peek_top(&self, side: Side) -> Option<(u64, u64, ArenaIndex)> {
        match side {
            Side::Bid => self.bids.peek().map(|e| (e.price, e.timestamp_ns, e.index)),
            Side::Ask => self.asks.peek().map(|e| (e.price, e.timestamp_ns, e.index)),
        }
    }

    pub(crate) fn pop_top(&mut self, side: Side) {
        match side {
            Side::Bid => {
                self.bids.pop();
            }
            Side::Ask => {
                self.asks.pop();
            }
        }
    }

    pub(crate) fn push(&mut self, side: Side, price: u64, timestamp_ns: u64, index: ArenaIndex) {
        match side {
            Side::Bid => self.bids.push(BidEntry { price, timestamp_ns, index }),
            Side::Ask => self.asks.push(AskEntry { price, timestamp_ns, index }),
        }
    }

    /// Peel cancelled/fully-filled tops until a live entry surfaces or the
    /// side empties out; returns that side's best price, or `0` if empty.
    /// Mutates heap shape (the lazy cleanup) but never touches order state.
    fn best_price(&mut self, arena: &OrderArena, side: Side) -> u64 {
        loop {
            let Some((price, _, index)) = self.peek_top(side) else {
                return 0;
            };
            match arena.record(side, index) {
                Ok(record) if !record.is_done() => return price,
                _ => self.pop_top(side),
            }
        }
    }

    pub fn best_bid_ask(&mut self, arena: &OrderArena) -> (u64, u64) {
        let best_bid = self.best_price(arena, Side::Bid);
        let best_ask = self.best_price(arena, Side::Ask);
        (best_bid, best_ask)
    }
}
