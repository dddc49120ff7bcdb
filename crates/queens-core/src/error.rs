//! Error types for the benchmark workspace

use thiserror::Error;

/// Main error type shared across the benchmark workspace.
///
/// Search exhaustion (a stochastic solver giving up) is deliberately not an
/// error: it is reported through per-run success flags and aggregated into
/// success rates.
#[derive(Debug, Error)]
pub enum QueensError {
    /// Error in benchmark configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O failure while reading or writing artifacts
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted metrics could not be parsed
    #[error("malformed metrics: {0}")]
    MetricsParse(String),

    /// Chart rendering failure
    #[error("chart rendering error: {0}")]
    Chart(String),

    /// A search that was expected to produce a solution found none
    #[error("no solution found")]
    NoSolution,
}

/// Result type alias for benchmark operations
pub type Result<T> = std::result::Result<T, QueensError>;
