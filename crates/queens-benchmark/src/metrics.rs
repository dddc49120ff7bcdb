//! Persisted metrics data model.
//!
//! The structure serializes to a flat JSON document keyed by solver name,
//! with a `find_one` sub-record per solver and an additional `find_all`
//! record for backtracking. Cost fields are named per algorithm
//! (`avg_cost_nodes`, `avg_cost_conflict_evals`, `avg_cost_attempts`) since
//! their units are not comparable.

use std::path::Path;

use queens_core::{Board, QueensError, Result};
use serde::{Deserialize, Serialize};

/// Aggregated backtracking metrics, both modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktrackingMetrics {
    pub find_one: BacktrackingFindOne,
    pub find_all: BacktrackingFindAll,
}

/// Backtracking "stop at first solution" aggregates.
///
/// No success rate: the search is deterministic and always succeeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktrackingFindOne {
    pub avg_time_s: f64,
    pub avg_mem_peak_kb: f64,
    pub avg_cost_nodes: f64,
    pub solution_example: Option<Board>,
}

/// Backtracking "enumerate all solutions" aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktrackingFindAll {
    pub avg_time_s: f64,
    pub avg_mem_peak_kb: f64,
    pub avg_cost_nodes: f64,
    pub solutions_count: usize,
}

/// Aggregated hill-climbing metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HillClimbingMetrics {
    pub find_one: HillClimbingFindOne,
}

/// Hill-climbing aggregates over the successful runs only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HillClimbingFindOne {
    pub avg_time_s: f64,
    pub avg_mem_peak_kb: f64,
    pub avg_cost_conflict_evals: f64,
    pub success_rate: f64,
    pub solutions_found_count: usize,
    pub solution_example: Option<Board>,
}

/// Aggregated random-restart metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomRestartMetrics {
    pub find_one: RandomRestartFindOne,
}

/// Random-restart aggregates over the successful runs only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomRestartFindOne {
    pub avg_time_s: f64,
    pub avg_mem_peak_kb: f64,
    pub avg_cost_attempts: f64,
    pub success_rate: f64,
    pub solutions_found_count: usize,
    pub solution_example: Option<Board>,
}

/// The complete persisted metrics document.
///
/// Each solver key is optional so the chart renderer stays robust to partial
/// documents: a missing key is skipped, never a failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtracking: Option<BacktrackingMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hill_climbing: Option<HillClimbingMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_restart: Option<RandomRestartMetrics>,
}

impl MetricsReport {
    /// Returns true if no solver produced metrics.
    pub fn is_empty(&self) -> bool {
        self.backtracking.is_none() && self.hill_climbing.is_none() && self.random_restart.is_none()
    }

    /// Writes the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| QueensError::MetricsParse(e.to_string()))?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Reads a report back from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`QueensError::Io`] if the file cannot be read and
    /// [`QueensError::MetricsParse`] if it is not a valid metrics document;
    /// callers (the chart renderer) abort gracefully on either.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| QueensError::MetricsParse(e.to_string()))
    }
}
