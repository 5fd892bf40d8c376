use std::sync::Once;

use clob_core::prelude::*;

static TRACING_INIT: Once = Once::new();

/// Installs a fmt subscriber once per test binary so `tracing::trace!`/
/// `debug!` output from the engine is visible under `--nocapture`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// A single-instrument engine ticking a `StepClock`, which is enough to
/// give every Place call a distinct, ordered timestamp without relying on
/// wall-clock granularity.
pub fn new_engine() -> MatchingEngine<StepClock> {
    init_tracing();
    MatchingEngine::with_clock(StepClock::new(1))
}

pub fn with_one_instrument() -> (MatchingEngine<StepClock>, u64) {
    let engine = new_engine();
    let instrument_id = engine.add_instrument("Test Instrument", "TEST");
    (engine, instrument_id)
}
