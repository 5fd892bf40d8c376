//! The continuous double auction: matches one newly-placed order against the
//! opposite side of a book, then rests any unfilled remainder.

use std::sync::Mutex;

use crate::arena::OrderArena;
use crate::book::OrderBook;
use crate::error::EngineError;
use crate::types::{encode_id, ArenaIndex, Side, Trade, TradeRole};

/// Match `index` (just appended on `side`) against the opposite side of
/// `book`, recording every fill leg into `trades`, then rest any remainder.
///
/// `book` is already exclusively held by the caller for the whole call (the
/// per-instrument book mutex), so same-instrument matching still runs to
/// completion without yielding. `arena` is the *process-wide* arena shared
/// by every instrument, so it is locked and released around each individual
/// read/mutate instead of being held for the whole cascade — otherwise a
/// deep walk on one instrument would serialise every other instrument's
/// Place/Cancel/Query behind it, which spec.md §5's "cross-instrument
/// operations are independent" rules out.
///
/// Runs to completion without yielding. An `Internal` overflow error aborts
/// the loop immediately and is propagated to the caller, which must treat it
/// as fatal per spec.md §7 ("Internal (fatal)... implementers must either
/// use wide enough integers to make this unreachable in practice, or
/// abort — continuing would corrupt accounting").
pub fn place_and_match(
    book: &mut OrderBook,
    arena: &Mutex<OrderArena>,
    side: Side,
    index: ArenaIndex,
    now_ns: u64,
    trades: &mut Vec<Trade>,
) -> Result<(), EngineError> {
    let opposite = side.opposite();

    loop {
        let remaining = arena.lock().unwrap().record(side, index)?.remaining();
        if remaining == 0 {
            break;
        }

        let Some((top_price, _, top_index)) = book.peek_top(opposite) else {
            break;
        };

        if arena.lock().unwrap().record(opposite, top_index)?.is_done() {
            book.pop_top(opposite);
            continue;
        }

        let new_price = arena.lock().unwrap().record(side, index)?.price;
        let crosses = match side {
            Side::Bid => top_price <= new_price,
            Side::Ask => top_price >= new_price,
        };
        if !crosses {
            break;
        }

        let quantity = {
            let guard = arena.lock().unwrap();
            let available = guard.record(opposite, top_index)?.remaining();
            let want = guard.record(side, index)?.remaining();
            available.min(want)
        };

        arena
            .lock()
            .unwrap()
            .apply_fill(side, index, opposite, top_index, quantity, top_price)?;

        let maker_order_id = encode_id(opposite, top_index);
        let taker_order_id = encode_id(side, index);

        trades.push(Trade {
            role: TradeRole::Maker,
            order_id: maker_order_id,
            price: top_price,
            quantity,
            created_at: now_ns,
        });
        trades.push(Trade {
            role: TradeRole::Taker,
            order_id: taker_order_id,
            price: top_price,
            quantity,
            created_at: now_ns,
        });

        tracing::trace!(maker_order_id, taker_order_id, price = top_price, quantity, "fill");

        if arena.lock().unwrap().record(opposite, top_index)?.is_done() {
            book.pop_top(opposite);
        }
    }

    let (remaining, price, timestamp_ns) = {
        let guard = arena.lock().unwrap();
        let record = guard.record(side, index)?;
        (record.remaining(), record.price, record.timestamp_ns)
    };
    if remaining > 0 {
        book.push(side, price, timestamp_ns, index);
    }
    Ok(())
}
