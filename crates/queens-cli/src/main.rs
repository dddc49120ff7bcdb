//! queens-bench: benchmark three 8-queens search strategies and render
//! comparative charts.
//!
//! Batch tool: `run` executes the full sweep, persists the metrics JSON and
//! renders charts; `chart` re-renders charts from an existing metrics file.
//! Log verbosity is controlled through `RUST_LOG`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use queens_benchmark::{BenchmarkConfig, BenchmarkHarness, MetricsReport, TrackingAllocator};
use queens_core::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

// Heap accounting for the per-run memory probe.
#[global_allocator]
static ALLOC: TrackingAllocator = TrackingAllocator;

#[derive(Debug, Parser)]
#[command(
    name = "queens-bench",
    about = "Benchmark backtracking, hill climbing and random restart on 8-queens"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the benchmark sweep, persist metrics and render charts.
    Run {
        /// TOML configuration file; defaults apply when absent.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Seed for the stochastic solvers (overrides the config file).
        #[arg(long)]
        seed: Option<u64>,
        /// Metrics output path (overrides the config file).
        #[arg(long)]
        metrics: Option<PathBuf>,
        /// Chart output directory (overrides the config file).
        #[arg(long)]
        charts: Option<PathBuf>,
        /// Skip chart rendering.
        #[arg(long)]
        no_charts: bool,
    },
    /// Render charts from an existing metrics file.
    Chart {
        /// Metrics JSON written by a previous `run`.
        #[arg(long, default_value = "benchmark_metrics.json")]
        metrics: PathBuf,
        /// Chart output directory.
        #[arg(long, default_value = "charts")]
        out: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Run {
            config,
            seed,
            metrics,
            charts,
            no_charts,
        } => {
            let mut config = match config {
                Some(path) => BenchmarkConfig::load(path)?,
                None => BenchmarkConfig::default(),
            };
            if seed.is_some() {
                config = config.with_random_seed(seed);
            }
            if let Some(path) = metrics {
                config = config.with_metrics_output(path);
            }
            if let Some(dir) = charts {
                config = config.with_chart_output_dir(dir);
            }

            let harness = BenchmarkHarness::new(config);
            let report = harness.run();
            report.save(&harness.config().metrics_output)?;
            info!(
                event = "metrics_saved",
                path = %harness.config().metrics_output.display(),
            );

            print_summary(&report);

            if !no_charts {
                let artifacts =
                    queens_chart::render_charts(&report, &harness.config().chart_output_dir)?;
                println!("\n{} chart(s) written to {}", artifacts.len(),
                    harness.config().chart_output_dir.display());
            }
            Ok(())
        }
        Command::Chart { metrics, out } => {
            let report = MetricsReport::load(&metrics)?;
            let artifacts = queens_chart::render_charts(&report, &out)?;
            println!("{} chart(s) written to {}", artifacts.len(), out.display());
            Ok(())
        }
    }
}

fn print_summary(report: &MetricsReport) {
    println!("--- Benchmark Summary ---");

    if let Some(bt) = &report.backtracking {
        println!("\nBacktracking (find one):");
        println!("  avg time:        {:.6} s", bt.find_one.avg_time_s);
        println!("  avg peak memory: {:.2} kB", bt.find_one.avg_mem_peak_kb);
        println!("  avg nodes:       {:.0}", bt.find_one.avg_cost_nodes);
        if let Some(solution) = &bt.find_one.solution_example {
            println!("  example: {:?}", solution.rows());
        }
        println!("Backtracking (find all):");
        println!("  avg time:        {:.6} s", bt.find_all.avg_time_s);
        println!("  avg peak memory: {:.2} kB", bt.find_all.avg_mem_peak_kb);
        println!("  avg nodes:       {:.0}", bt.find_all.avg_cost_nodes);
        println!("  solutions:       {}", bt.find_all.solutions_count);
    }

    if let Some(hc) = &report.hill_climbing {
        let m = &hc.find_one;
        println!("\nHill Climbing:");
        println!("  avg time (successful runs): {:.6} s", m.avg_time_s);
        println!("  avg peak memory:            {:.2} kB", m.avg_mem_peak_kb);
        println!("  avg conflict evaluations:   {:.1}", m.avg_cost_conflict_evals);
        println!("  success rate:               {:.1}%", m.success_rate * 100.0);
        if let Some(solution) = &m.solution_example {
            println!("  example: {:?}", solution.rows());
        }
    }

    if let Some(rr) = &report.random_restart {
        let m = &rr.find_one;
        println!("\nRandom Restart:");
        println!("  avg time (successful runs): {:.6} s", m.avg_time_s);
        println!("  avg peak memory:            {:.2} kB", m.avg_mem_peak_kb);
        println!("  avg attempts:               {:.1}", m.avg_cost_attempts);
        println!("  success rate:               {:.1}%", m.success_rate * 100.0);
        if let Some(solution) = &m.solution_example {
            println!("  example: {:?}", solution.rows());
        }
    }
}
