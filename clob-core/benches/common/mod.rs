use clob_core::prelude::*;

pub fn fresh_engine() -> (MatchingEngine<StepClock>, u64) {
    let engine = MatchingEngine::with_clock(StepClock::new(1));
    let instrument = engine.add_instrument("Bench Instrument", "BENCH");
    (engine, instrument)
}
