//! Shared value types: sides, order records, public ids, snapshots and trades.

use crate::error::EngineError;

/// The most significant bit of a 64-bit order id. Set iff the order lives on
/// the ask side; see `encode_id`/`decode_index`.
pub const ASK_FLAG: u64 = 1 << 63;

/// Book side. `Bid` buys, `Ask` sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum Side {
    Bid = 0,
    Ask = 1,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Bid => Side::Ask,
            Side::Ask => Side::Bid,
        }
    }
}

/// Public order identifier, partitioned by side via `ASK_FLAG`.
pub type OrderId = u64;

/// Dense position within a side's arena.
pub type ArenaIndex = u32;

/// Encode a side + dense arena index into a public order id.
pub fn encode_id(side: Side, index: ArenaIndex) -> OrderId {
    match side {
        Side::Bid => index as u64,
        Side::Ask => ASK_FLAG | index as u64,
    }
}

/// Strip `ASK_FLAG` (when present) to recover the dense arena index, trusting
/// the caller-supplied `side` to say whether the flag should be there.
pub fn decode_index(side: Side, order_id: OrderId) -> ArenaIndex {
    match side {
        Side::Bid => order_id as ArenaIndex,
        Side::Ask => (order_id & !ASK_FLAG) as ArenaIndex,
    }
}

/// Recover both side and index purely from the id's top bit, for callers
/// that present only the raw id.
pub fn decode_side_and_index(order_id: OrderId) -> (Side, ArenaIndex) {
    if order_id & ASK_FLAG != 0 {
        (Side::Ask, (order_id & !ASK_FLAG) as ArenaIndex)
    } else {
        (Side::Bid, order_id as ArenaIndex)
    }
}

/// Order book state, per spec's per-order state machine.
/// `Resting` -> `PartiallyFilled` -> `Filled`; any non-terminal state can
/// move to `Cancelled`. `Filled` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OrderStatus {
    Resting,
    PartiallyFilled,
    Filled,
    Cancelled,
}

/// A resting limit order, owned by the arena.
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub side: Side,
    pub timestamp_ns: u64,
    pub price: u64,
    pub quantity: u64,
    pub filled_quantity: u64,
    pub balance: i64,
    pub is_cancelled: bool,
}

impl OrderRecord {
    pub fn new(side: Side, timestamp_ns: u64, price: u64, quantity: u64) -> Self {
        OrderRecord {
            side,
            timestamp_ns,
            price,
            quantity,
            filled_quantity: 0,
            balance: 0,
            is_cancelled: false,
        }
    }

    pub fn remaining(&self) -> u64 {
        self.quantity - self.filled_quantity
    }

    pub fn is_done(&self) -> bool {
        self.is_cancelled || self.filled_quantity == self.quantity
    }

    pub fn status(&self) -> OrderStatus {
        if self.is_cancelled {
            OrderStatus::Cancelled
        } else if self.filled_quantity == self.quantity {
            OrderStatus::Filled
        } else if self.filled_quantity > 0 {
            OrderStatus::PartiallyFilled
        } else {
            OrderStatus::Resting
        }
    }

    pub fn snapshot(&self, order_id: OrderId) -> OrderSnapshot {
        OrderSnapshot {
            order_id,
            timestamp_ns: self.timestamp_ns,
            balance: self.balance,
            price: self.price,
            quantity: self.quantity,
            filled_quantity: self.filled_quantity,
            is_cancelled: self.is_cancelled,
            found: true,
        }
    }
}

/// Read-only view of an order record, returned by `QueryOrder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OrderSnapshot {
    pub order_id: OrderId,
    pub timestamp_ns: u64,
    pub balance: i64,
    pub price: u64,
    pub quantity: u64,
    pub filled_quantity: u64,
    pub is_cancelled: bool,
    pub found: bool,
}

impl OrderSnapshot {
    pub fn not_found(order_id: OrderId) -> Self {
        OrderSnapshot {
            order_id,
            timestamp_ns: 0,
            balance: 0,
            price: 0,
            quantity: 0,
            filled_quantity: 0,
            is_cancelled: false,
            found: false,
        }
    }
}

/// Which leg of a trade a record played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeRole {
    Maker,
    Taker,
}

/// A single fill leg. Every match produces a (maker, taker) pair. Not
/// streamed anywhere; kept on a per-book log for introspection/testing only.
#[derive(Debug, Clone, Copy)]
pub struct Trade {
    pub role: TradeRole,
    pub order_id: OrderId,
    pub price: u64,
    pub quantity: u64,
    pub created_at: u64,
}

/// `quantity * price`, checked, down-cast to the signed accumulator balance
/// deltas are kept in. Overflow is `EngineError::Internal`, never a silent
/// wraparound.
pub fn trade_notional(quantity: u64, price: u64) -> Result<i64, EngineError> {
    let raw = quantity
        .checked_mul(price)
        .ok_or(EngineError::Internal("quantity * price overflow"))?;
    i64::try_from(raw).map_err(|_| EngineError::Internal("trade notional exceeds i64 range"))
}
