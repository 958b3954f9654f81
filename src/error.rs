//! Error types returned by the library.

use thiserror::Error;
use crate::predictor::MAX_INDEX_BITS;

/// A rejected [`PredictorConfig`](crate::predictor::PredictorConfig).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the table must be indexed by at least one bit (m = 0)")]
    ZeroIndexBits,

    #[error("m = {} is too large (at most {} index bits)", .0, MAX_INDEX_BITS)]
    IndexBitsTooLarge(usize),

    #[error("history length n = {history_bits} exceeds index width m = {index_bits}")]
    HistoryTooLong { history_bits: usize, index_bits: usize },
}

/// A failure while reading a trace.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to read trace")]
    Io(#[from] std::io::Error),

    #[error("malformed trace record on line {line}: {content:?}")]
    Malformed { line: usize, content: String },
}
