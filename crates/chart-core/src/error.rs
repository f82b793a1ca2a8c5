// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for chart construction, lookup and output.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// Series has no values, so neither scale has a domain.
    #[error("series is empty; nothing to scale or draw")]
    EmptySeries,
    #[error("index {index} is out of range for a series of length {len}")]
    OutOfRangeIndex { index: usize, len: usize },
    #[error("invalid color '{0}'")]
    InvalidColor(String),
    #[error("surface error: {0}")]
    Surface(String),
}
