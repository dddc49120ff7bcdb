//! Queens Benchmark - harness, measurement and metrics persistence
//!
//! This crate runs each solver for a configured number of repetitions,
//! brackets every invocation with a scoped time/memory probe, aggregates the
//! results, and persists them as a flat JSON structure keyed by solver name.
//!
//! # Overview
//!
//! - [`BenchmarkConfig`]: repetition counts, seed, output paths; loadable
//!   from TOML
//! - [`Probe`] / [`TrackingAllocator`]: scoped wall-clock and peak-heap
//!   measurement around exactly one solver invocation
//! - [`BenchmarkHarness`]: the run-everything sweep
//! - [`MetricsReport`]: the persisted metrics data model
//!
//! # Example
//!
//! ```
//! use queens_benchmark::{BenchmarkConfig, BenchmarkHarness};
//!
//! let config = BenchmarkConfig::new()
//!     .with_backtracking_runs(1)
//!     .with_stochastic_runs(2)
//!     .with_random_seed(Some(42));
//! let report = BenchmarkHarness::new(config).run();
//! assert!(report.backtracking.is_some());
//! ```

pub mod config;
pub mod metrics;
pub mod probe;
pub mod runner;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod runner_tests;

pub use config::BenchmarkConfig;
pub use metrics::{
    BacktrackingFindAll, BacktrackingFindOne, BacktrackingMetrics, HillClimbingFindOne,
    HillClimbingMetrics, MetricsReport, RandomRestartFindOne, RandomRestartMetrics,
};
pub use probe::{Measurement, Probe, TrackingAllocator};
pub use runner::BenchmarkHarness;

// The probe reads heap counters maintained by `TrackingAllocator`; unit tests
// of this crate install it for their own test binary.
#[cfg(test)]
#[global_allocator]
static TEST_ALLOC: TrackingAllocator = TrackingAllocator;
