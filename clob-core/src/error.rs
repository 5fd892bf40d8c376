//! Error taxonomy for the engine and its service boundary.

use thiserror::Error;

/// Every fallible outcome the engine and its wrapping service can produce.
///
/// `UnknownOrder` and `AlreadyTerminal` are deliberately *not* variants here:
/// both surface as plain `bool`/`found` fields on the façade (see
/// `CancelOrder`/`QueryOrder` in `engine.rs`), matching the wire contract in
/// `service.rs`. Keeping them out of this enum avoids a variant nothing ever
/// constructs.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum EngineError {
    #[error("unknown instrument")]
    UnknownInstrument,

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("internal engine error: {0}")]
    Internal(&'static str),
}
