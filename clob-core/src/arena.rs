//! The order arena: two append-only vectors of `OrderRecord`, one per side.
//!
//! Records are never moved or compacted once appended; a dense index into
//! the owning side's vector is a stable back-reference for the life of the
//! process. The heap in `book.rs` holds exactly this index, never a record.

use crate::error::EngineError;
use crate::types::{ArenaIndex, OrderId, OrderRecord, OrderSnapshot, Side};

#[derive(Debug, Default)]
pub struct OrderArena {
    bids: Vec<OrderRecord>,
    asks: Vec<OrderRecord>,
}

impl OrderArena {
    pub fn new() -> Self {
        OrderArena {
            bids: Vec::new(),
            asks: Vec::new(),
        }
    }

    fn side_vec(&self, side: Side) -> &Vec<OrderRecord> {
        match side {
            Side::Bid => &self.bids,
            Side::Ask => &self.asks,
        }
    }

    fn side_vec_mut(&mut self, side: Side) -> &mut Vec<OrderRecord> {
        match side {
            Side::Bid => &mut self.bids,
            Side::Ask => &mut self.asks,
        }
    }

    /// Append a new record and return its dense index.
    pub fn push(&mut self, side: Side, timestamp_ns: u64, price: u64, quantity: u64) -> ArenaIndex {
        let record = OrderRecord::new(side, timestamp_ns, price, quantity);
        let vec = self.side_vec_mut(side);
        vec.push(record);
        (vec.len() - 1) as ArenaIndex
    }

    /// Untrusted lookup: index supplied by an external caller (Cancel/Query).
    pub fn get(&self, side: Side, index: ArenaIndex) -> Option<&OrderRecord> {
        self.side_vec(side).get(index as usize)
    }

    fn get_mut(&mut self, side: Side, index: ArenaIndex) -> Option<&mut OrderRecord> {
        self.side_vec_mut(side).get_mut(index as usize)
    }

    /// Trusted lookup: index came back off our own heap. Out-of-range here
    /// would mean the heap and arena have drifted, which is a bug, not a
    /// caller error.
    pub fn record(&self, side: Side, index: ArenaIndex) -> Result<&OrderRecord, EngineError> {
        self.get(side, index)
            .ok_or(EngineError::Internal("arena index out of range"))
    }

    pub fn record_mut(&mut self, side: Side, index: ArenaIndex) -> Result<&mut OrderRecord, EngineError> {
        self.get_mut(side, index)
            .ok_or(EngineError::Internal("arena index out of range"))
    }

    /// `false` for an unknown index or an already-terminal order (already
    /// cancelled, or fully filled); `true` on an actual state change.
    pub fn cancel(&mut self, side: Side, index: ArenaIndex) -> bool {
        match self.get_mut(side, index) {
            None => false,
            Some(record) => {
                if record.is_done() {
                    false
                } else {
                    record.is_cancelled = true;
                    true
                }
            }
        }
    }

    pub fn query(&self, side: Side, order_id: OrderId, index: ArenaIndex) -> Option<OrderSnapshot> {
        self.get(side, index).map(|record| record.snapshot(order_id))
    }

    /// Apply one matched fill of `quantity` units at `trade_price` to both
    /// legs. `taker_side`/`taker_index` and `maker_side`/`maker_index` are
    /// always on opposite sides, so the two records never alias.
    pub fn apply_fill(
        &mut self,
        taker_side: Side,
        taker_index: ArenaIndex,
        maker_side: Side,
        maker_index: ArenaIndex,
        quantity: u64,
        trade_price: u64,
    ) -> Result<(), EngineError> {
        let notional = crate::types::trade_notional(quantity, trade_price)?;

        {
            let taker = self.record_mut(taker_side, taker_index)?;
            taker.filled_quantity = taker
                .filled_quantity
                .checked_add(quantity)
                .ok_or(EngineError::Internal("filled_quantity overflow"))?;
            taker.balance = match taker_side {
                Side::Bid => taker.balance.checked_sub(notional),
                Side::Ask => taker.balance.checked_add(notional),
            }
            .ok_or(EngineError::Internal("balance overflow"))?;
        }
        {
            let maker = self.record_mut(maker_side, maker_index)?;
            maker.filled_quantity = maker
                .filled_quantity
                .checked_add(quantity)
                .ok_or(EngineError::Internal("filled_quantity overflow"))?;
            maker.balance = match maker_side {
                Side::Bid => maker.balance.checked_sub(notional),
                Side::Ask => maker.balance.checked_add(notional),
            }
            .ok_or(EngineError::Internal("balance overflow"))?;
        }
        Ok(())
    }
}
