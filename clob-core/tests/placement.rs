mod common;

use clob_core::prelude::*;
use common::with_one_instrument;

/// S1 — exact single match.
#[test]
fn exact_single_match() {
    let (engine, instrument) = with_one_instrument();

    let bid_id = engine.place_order(Side::Bid, instrument, 50_000, 800).unwrap();
    let ask_id = engine.place_order(Side::Ask, instrument, 50_000, 800).unwrap();

    assert_eq!(ask_id, 1 << 63);

    let bid = engine.query_order(Side::Bid, bid_id);
    let ask = engine.query_order(Side::Ask, ask_id);

    assert_eq!(bid.filled_quantity, 800);
    assert_eq!(ask.filled_quantity, 800);
    assert_eq!(bid.balance, -40_000_000);
    assert_eq!(ask.balance, 40_000_000);

    assert_eq!(engine.quote_best_bid_ask(instrument), Some((0, 0)));
}

/// S2 — partial aggressor remainder.
#[test]
fn partial_aggressor_remainder() {
    let (engine, instrument) = with_one_instrument();

    let ask_id = engine.place_order(Side::Ask, instrument, 15_000, 100).unwrap();
    let bid_id = engine.place_order(Side::Bid, instrument, 15_000, 150).unwrap();

    let ask = engine.query_order(Side::Ask, ask_id);
    let bid = engine.query_order(Side::Bid, bid_id);

    assert_eq!(ask.filled_quantity, 100);
    assert_eq!(bid.filled_quantity, 100);
    assert_eq!(bid.quantity - bid.filled_quantity, 50);
    assert_eq!(bid.balance, -1_500_000);
    assert_eq!(ask.balance, 1_500_000);

    assert_eq!(engine.quote_best_bid_ask(instrument), Some((15_000, 0)));
}

/// S3 — price-time priority on the ask side.
#[test]
fn price_time_priority_on_asks() {
    let (engine, instrument) = with_one_instrument();

    let ask_at_15000 = engine.place_order(Side::Ask, instrument, 15_000, 50).unwrap();
    let ask_at_14900 = engine.place_order(Side::Ask, instrument, 14_900, 50).unwrap();
    let bid_id = engine.place_order(Side::Bid, instrument, 15_000, 75).unwrap();

    let bid = engine.query_order(Side::Bid, bid_id);
    let better = engine.query_order(Side::Ask, ask_at_14900);
    let worse = engine.query_order(Side::Ask, ask_at_15000);

    assert_eq!(bid.filled_quantity, 75);
    assert_eq!(better.filled_quantity, 50);
    assert_eq!(worse.filled_quantity, 25);
    assert_eq!(bid.balance, -(50 * 14_900 + 25 * 15_000));

    assert_eq!(engine.quote_best_bid_ask(instrument), Some((0, 15_000)));
}

/// S4 — aggressor crosses and trades at the resting order's price.
#[test]
fn aggressor_crosses_at_resting_price() {
    let (engine, instrument) = with_one_instrument();

    let bid_id = engine.place_order(Side::Bid, instrument, 15_100, 100).unwrap();
    let ask_id = engine.place_order(Side::Ask, instrument, 15_000, 100).unwrap();

    let bid = engine.query_order(Side::Bid, bid_id);
    let ask = engine.query_order(Side::Ask, ask_id);

    assert_eq!(bid.filled_quantity, 100);
    assert_eq!(ask.filled_quantity, 100);
    assert_eq!(bid.balance, -1_510_000);
    assert_eq!(ask.balance, 1_510_000);
}

#[test]
fn no_cross_rests_on_both_sides() {
    let (engine, instrument) = with_one_instrument();

    engine.place_order(Side::Bid, instrument, 100, 10).unwrap();
    engine.place_order(Side::Ask, instrument, 200, 10).unwrap();

    assert_eq!(engine.quote_best_bid_ask(instrument), Some((100, 200)));
}

#[test]
fn bid_ids_are_dense_and_ask_ids_carry_the_flag() {
    let (engine, instrument) = with_one_instrument();

    let b0 = engine.place_order(Side::Bid, instrument, 10, 1).unwrap();
    let b1 = engine.place_order(Side::Bid, instrument, 10, 1).unwrap();
    let a0 = engine.place_order(Side::Ask, instrument, 20, 1).unwrap();

    assert_eq!(b0, 0);
    assert_eq!(b1, 1);
    assert_eq!(a0, 1 << 63);
}
