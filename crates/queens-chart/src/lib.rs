//! Queens Chart - comparative charts from persisted benchmark metrics
//!
//! Pure consumer of [`queens_benchmark::MetricsReport`]: for every solver
//! present in the report it renders bar charts comparing average time
//! (log-scaled), peak memory, and the per-algorithm search cost, plus a
//! dedicated trio of charts for backtracking's enumerate-all mode. One SVG
//! artifact per chart, named deterministically from the solver label and
//! metric.
//!
//! A solver with zero successes is skipped with a logged notice rather than
//! failing the whole render.

pub mod render;


pub use render::render_charts;
