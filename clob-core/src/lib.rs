//! Matching core of a central limit order book exchange: per-instrument
//! order books, continuous price-time-priority matching, an order arena
//! with stable identifiers, and a Place/Cancel/Query/Quote façade.

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

pub mod arena;
pub mod book;
pub mod clock;
pub mod engine;
pub mod error;
pub mod instrument;
pub mod matching;
pub mod service;
pub mod types;

pub mod prelude {
    pub use crate::arena::*;
    pub use crate::book::OrderBook;
    pub use crate::clock::*;
    pub use crate::engine::*;
    pub use crate::error::*;
    pub use crate::instrument::*;
    pub use crate::service::*;
    pub use crate::types::*;
}
