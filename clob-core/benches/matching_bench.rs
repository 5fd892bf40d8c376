mod common;

use clob_core::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn bench_no_match_rest(c: &mut Criterion) {
    c.bench_function("place_order/no_match_rest", |b| {
        b.iter_batched(
            common::fresh_engine,
            |(engine, instrument)| {
                black_box(engine.place_order(Side::Bid, instrument, 100, 10).unwrap());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_single_full_match(c: &mut Criterion) {
    c.bench_function("place_order/single_full_match", |b| {
        b.iter_batched(
            || {
                let (engine, instrument) = common::fresh_engine();
                engine.place_order(Side::Bid, instrument, 100, 10).unwrap();
                (engine, instrument)
            },
            |(engine, instrument)| {
                black_box(engine.place_order(Side::Ask, instrument, 100, 10).unwrap());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_deep_book_walk(c: &mut Criterion) {
    c.bench_function("place_order/walks_100_resting_orders", |b| {
        b.iter_batched(
            || {
                let (engine, instrument) = common::fresh_engine();
                for i in 0..100u64 {
                    engine.place_order(Side::Ask, instrument, 100 + i, 1).unwrap();
                }
                (engine, instrument)
            },
            |(engine, instrument)| {
                black_box(engine.place_order(Side::Bid, instrument, 1_000, 100).unwrap());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_quote(c: &mut Criterion) {
    c.bench_function("quote_best_bid_ask/warm_book", |b| {
        let (engine, instrument) = common::fresh_engine();
        for i in 0..1_000u64 {
            engine.place_order(Side::Bid, instrument, i, 1).unwrap();
            engine.place_order(Side::Ask, instrument, 2_000 + i, 1).unwrap();
        }
        b.iter(|| black_box(engine.quote_best_bid_ask(instrument)));
    });
}

criterion_group!(
    benches,
    bench_no_match_rest,
    bench_single_full_match,
    bench_deep_book_walk,
    bench_quote
);
criterion_main!(benches);
