//! Bar-chart rendering with plotters (SVG backend).

use std::path::{Path, PathBuf};

use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::prelude::*;
use queens_benchmark::MetricsReport;
use queens_core::{QueensError, Result};
use tracing::{info, warn};

const CHART_SIZE: (u32, u32) = (800, 600);

// Bar colors per solver, in comparative-chart order.
const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const LIGHT_CORAL: RGBColor = RGBColor(240, 128, 128);
const LIGHT_GREEN: RGBColor = RGBColor(144, 238, 144);
const GOLD: RGBColor = RGBColor(255, 215, 0);

/// One solver's row in the comparative charts.
struct ChartEntry {
    label: &'static str,
    slug: &'static str,
    time_s: f64,
    mem_kb: f64,
    cost: f64,
    cost_desc: &'static str,
    color: RGBColor,
}

/// Renders every chart the report supports into `out_dir`.
///
/// Returns the paths of the artifacts written. Solvers absent from the
/// report, and stochastic solvers with a zero success rate, are skipped with
/// a logged notice.
///
/// # Errors
///
/// Returns [`QueensError::Chart`] if a chart fails to render and
/// [`QueensError::Io`] if the output directory cannot be created.
pub fn render_charts(report: &MetricsReport, out_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    if report.is_empty() {
        warn!("metrics report contains no solver data; nothing to render");
        return Ok(Vec::new());
    }
    std::fs::create_dir_all(out_dir)?;

    let mut entries = Vec::new();
    match &report.backtracking {
        Some(bt) => entries.push(ChartEntry {
            label: "Backtracking",
            slug: "backtracking",
            time_s: bt.find_one.avg_time_s,
            mem_kb: bt.find_one.avg_mem_peak_kb,
            cost: bt.find_one.avg_cost_nodes,
            cost_desc: "Nodes visited",
            color: SKY_BLUE,
        }),
        None => warn!("no backtracking metrics present; skipping its charts"),
    }
    match &report.hill_climbing {
        Some(hc) if hc.find_one.success_rate > 0.0 => entries.push(ChartEntry {
            label: "Hill Climbing",
            slug: "hill_climbing",
            time_s: hc.find_one.avg_time_s,
            mem_kb: hc.find_one.avg_mem_peak_kb,
            cost: hc.find_one.avg_cost_conflict_evals,
            cost_desc: "Conflict evaluations",
            color: LIGHT_CORAL,
        }),
        Some(_) => warn!("hill climbing found no solutions; skipping its charts"),
        None => warn!("no hill climbing metrics present; skipping its charts"),
    }
    match &report.random_restart {
        Some(rr) if rr.find_one.success_rate > 0.0 => entries.push(ChartEntry {
            label: "Random Restart",
            slug: "random_restart",
            time_s: rr.find_one.avg_time_s,
            mem_kb: rr.find_one.avg_mem_peak_kb,
            cost: rr.find_one.avg_cost_attempts,
            cost_desc: "Attempts",
            color: LIGHT_GREEN,
        }),
        Some(_) => warn!("random restart found no solutions; skipping its charts"),
        None => warn!("no random restart metrics present; skipping its charts"),
    }

    let mut artifacts = Vec::new();

    if !entries.is_empty() {
        let labels: Vec<&str> = entries.iter().map(|e| e.label).collect();
        let colors: Vec<RGBColor> = entries.iter().map(|e| e.color).collect();

        let path = out_dir.join("comparative_time_one_solution.svg");
        let times: Vec<f64> = entries.iter().map(|e| e.time_s).collect();
        draw_bar_chart_log(
            &path,
            "Average Time to Find ONE Valid Solution",
            "Average time (s, log scale)",
            &labels,
            &times,
            &colors,
        )?;
        artifacts.push(path);

        let path = out_dir.join("comparative_memory_one_solution.svg");
        let mems: Vec<f64> = entries.iter().map(|e| e.mem_kb).collect();
        draw_bar_chart(
            &path,
            "Average Peak Memory to Find ONE Solution",
            "Average peak memory (kB)",
            &labels,
            &mems,
            &colors,
        )?;
        artifacts.push(path);

        // Cost units differ per solver, so each gets its own chart and axis.
        for entry in &entries {
            let path = out_dir.join(format!("cost_{}.svg", entry.slug));
            draw_bar_chart(
                &path,
                &format!("Search Cost: {}", entry.label),
                entry.cost_desc,
                &[entry.label],
                &[entry.cost],
                &[entry.color],
            )?;
            artifacts.push(path);
        }
    }

    if let Some(bt) = &report.backtracking {
        let count = bt.find_all.solutions_count;

        let path = out_dir.join("backtracking_time_all_solutions.svg");
        draw_bar_chart(
            &path,
            &format!("Backtracking: Time to Find ALL {count} Solutions"),
            "Average time (s)",
            &["Backtracking"],
            &[bt.find_all.avg_time_s],
            &[GOLD],
        )?;
        artifacts.push(path);

        let path = out_dir.join("backtracking_memory_all_solutions.svg");
        draw_bar_chart(
            &path,
            &format!("Backtracking: Memory to Find ALL {count} Solutions"),
            "Average peak memory (kB)",
            &["Backtracking"],
            &[bt.find_all.avg_mem_peak_kb],
            &[GOLD],
        )?;
        artifacts.push(path);

        let path = out_dir.join("backtracking_cost_all_solutions.svg");
        draw_bar_chart(
            &path,
            &format!("Backtracking: Cost to Find ALL {count} Solutions"),
            "Nodes visited",
            &["Backtracking"],
            &[bt.find_all.avg_cost_nodes],
            &[GOLD],
        )?;
        artifacts.push(path);
    }

    info!(event = "charts_rendered", count = artifacts.len());
    Ok(artifacts)
}

fn chart_err(e: impl std::fmt::Display) -> QueensError {
    QueensError::Chart(e.to_string())
}

/// Draws a linear-scale bar chart, one bar per label.
fn draw_bar_chart(
    path: &Path,
    title: &str,
    y_desc: &str,
    labels: &[&str],
    values: &[f64],
    colors: &[RGBColor],
) -> Result<()> {
    let y_max = values.iter().cloned().fold(0.0_f64, f64::max).max(1e-9) * 1.15;

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 26))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(80)
        .build_cartesian_2d((0..labels.len()).into_segmented(), 0.0..y_max)
        .map_err(chart_err)?;

    let owned_labels: Vec<String> = labels.iter().map(|l| l.to_string()).collect();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|seg: &SegmentValue<usize>| match seg {
            SegmentValue::CenterOf(i) => owned_labels.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .x_labels(labels.len())
        .y_desc(y_desc)
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(values.iter().enumerate().map(|(i, v)| {
            Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0),
                    (SegmentValue::Exact(i + 1), *v),
                ],
                colors[i].filled(),
            )
        }))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)
}

/// Draws a log-scale bar chart; values are clamped to a positive floor since
/// a log axis cannot represent zero.
fn draw_bar_chart_log(
    path: &Path,
    title: &str,
    y_desc: &str,
    labels: &[&str],
    values: &[f64],
    colors: &[RGBColor],
) -> Result<()> {
    let floor = values
        .iter()
        .cloned()
        .filter(|v| *v > 0.0)
        .fold(f64::INFINITY, f64::min);
    let floor = if floor.is_finite() { floor / 10.0 } else { 1e-9 };
    let y_max = values.iter().cloned().fold(0.0_f64, f64::max).max(floor) * 10.0;

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 26))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(80)
        .build_cartesian_2d((0..labels.len()).into_segmented(), (floor..y_max).log_scale())
        .map_err(chart_err)?;

    let owned_labels: Vec<String> = labels.iter().map(|l| l.to_string()).collect();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|seg: &SegmentValue<usize>| match seg {
            SegmentValue::CenterOf(i) => owned_labels.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .x_labels(labels.len())
        .y_desc(y_desc)
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(values.iter().enumerate().map(|(i, v)| {
            Rectangle::new(
                [
                    (SegmentValue::Exact(i), floor),
                    (SegmentValue::Exact(i + 1), v.max(floor)),
                ],
                colors[i].filled(),
            )
        }))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)
}
