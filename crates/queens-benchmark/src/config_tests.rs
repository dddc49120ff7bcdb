//! Tests for benchmark configuration.

use std::path::PathBuf;

use super::config::*;

#[test]
fn test_defaults() {
    let config = BenchmarkConfig::new();
    assert_eq!(config.backtracking_runs, 5);
    assert_eq!(config.stochastic_runs, 100);
    assert_eq!(config.random_seed, None);
    assert_eq!(config.metrics_output, PathBuf::from("benchmark_metrics.json"));
    assert_eq!(config.chart_output_dir, PathBuf::from("charts"));
}

#[test]
fn test_builder() {
    let config = BenchmarkConfig::new()
        .with_backtracking_runs(2)
        .with_stochastic_runs(10)
        .with_random_seed(Some(7))
        .with_metrics_output("out/metrics.json")
        .with_chart_output_dir("out/charts");
    assert_eq!(config.backtracking_runs, 2);
    assert_eq!(config.stochastic_runs, 10);
    assert_eq!(config.random_seed, Some(7));
    assert_eq!(config.metrics_output, PathBuf::from("out/metrics.json"));
    assert_eq!(config.chart_output_dir, PathBuf::from("out/charts"));
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        backtracking_runs = 3
        stochastic_runs = 25
        random_seed = 42
        metrics_output = "results.json"
    "#;

    let config = BenchmarkConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.backtracking_runs, 3);
    assert_eq!(config.stochastic_runs, 25);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.metrics_output, PathBuf::from("results.json"));
    // Unspecified fields fall back to defaults.
    assert_eq!(config.chart_output_dir, PathBuf::from("charts"));
}

#[test]
fn test_invalid_toml_is_a_config_error() {
    let err = BenchmarkConfig::from_toml_str("backtracking_runs = \"many\"").unwrap_err();
    assert!(matches!(err, queens_core::QueensError::Config(_)));
}

#[test]
fn test_missing_file_falls_back_to_default() {
    let config = BenchmarkConfig::load("does-not-exist.toml").unwrap_or_default();
    assert_eq!(config.backtracking_runs, 5);
}
