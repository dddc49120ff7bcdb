//! Benchmark configuration.

use std::path::{Path, PathBuf};

use queens_core::{QueensError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for a benchmark sweep.
///
/// Controls repetition counts, the random seed for the stochastic solvers,
/// and output paths. Loadable from a TOML file; every field has a default so
/// a missing file is handled with `unwrap_or_default()` at the call site.
///
/// # Example
///
/// ```
/// use queens_benchmark::BenchmarkConfig;
///
/// let config = BenchmarkConfig::new()
///     .with_backtracking_runs(3)
///     .with_stochastic_runs(50);
/// assert_eq!(config.backtracking_runs, 3);
/// assert_eq!(config.stochastic_runs, 50);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BenchmarkConfig {
    /// Repetitions for the deterministic backtracking solver (both modes).
    pub backtracking_runs: usize,
    /// Repetitions for hill climbing and random restart. Higher than the
    /// backtracking count because those solvers can fail individual runs.
    pub stochastic_runs: usize,
    /// Seed for the stochastic solvers. `None` seeds from the OS.
    pub random_seed: Option<u64>,
    /// Where the metrics JSON is written.
    pub metrics_output: PathBuf,
    /// Directory receiving chart artifacts.
    pub chart_output_dir: PathBuf,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            backtracking_runs: 5,
            stochastic_runs: 100,
            random_seed: None,
            metrics_output: PathBuf::from("benchmark_metrics.json"),
            chart_output_dir: PathBuf::from("charts"),
        }
    }
}

impl BenchmarkConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backtracking repetition count.
    pub fn with_backtracking_runs(mut self, runs: usize) -> Self {
        self.backtracking_runs = runs;
        self
    }

    /// Sets the stochastic repetition count.
    pub fn with_stochastic_runs(mut self, runs: usize) -> Self {
        self.stochastic_runs = runs;
        self
    }

    /// Sets (or clears) the random seed.
    pub fn with_random_seed(mut self, seed: Option<u64>) -> Self {
        self.random_seed = seed;
        self
    }

    /// Sets the metrics output path.
    pub fn with_metrics_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.metrics_output = path.into();
        self
    }

    /// Sets the chart output directory.
    pub fn with_chart_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.chart_output_dir = dir.into();
        self
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| QueensError::Config(e.to_string()))
    }
}
