//! Scoped time and peak-memory measurement.
//!
//! The harness must attribute a wall-clock duration and a peak heap figure to
//! exactly one solver invocation: measurement starts immediately before the
//! search begins and stops immediately after it returns, on every exit path.
//!
//! Heap accounting comes from [`TrackingAllocator`], a counting wrapper over
//! the system allocator. The binary that wants memory figures installs it:
//!
//! ```ignore
//! #[global_allocator]
//! static ALLOC: queens_benchmark::TrackingAllocator =
//!     queens_benchmark::TrackingAllocator;
//! ```
//!
//! Without the allocator installed the counters stay at zero and
//! [`Measurement::peak_mem_kb`] reads `0.0`; timing is unaffected.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

static CURRENT_BYTES: AtomicUsize = AtomicUsize::new(0);
static PEAK_BYTES: AtomicUsize = AtomicUsize::new(0);

/// Counting allocator wrapping [`System`].
///
/// Maintains the live byte count and a high-water mark read by [`Probe`].
pub struct TrackingAllocator;

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            let live = CURRENT_BYTES.fetch_add(layout.size(), Ordering::Relaxed) + layout.size();
            PEAK_BYTES.fetch_max(live, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        CURRENT_BYTES.fetch_sub(layout.size(), Ordering::Relaxed);
    }
}

/// What a [`Probe`] measured.
#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    /// Wall-clock duration of the bracketed scope.
    pub elapsed: Duration,
    /// Peak heap growth over the scope's starting level, in kilobytes.
    pub peak_mem_kb: f64,
}

/// A scoped time/memory measurement around one solver invocation.
///
/// Starting a probe resets the allocator high-water mark to the current live
/// level, so allocations from earlier runs are not attributed to this one.
///
/// # Example
///
/// ```
/// use queens_benchmark::Probe;
///
/// let probe = Probe::start();
/// let v: Vec<u64> = (0..1024).collect();
/// let measurement = probe.finish();
/// assert!(measurement.elapsed.as_nanos() > 0);
/// drop(v);
/// ```
#[derive(Debug)]
pub struct Probe {
    started: Instant,
    baseline_bytes: usize,
}

impl Probe {
    /// Starts measuring: snapshots the clock and resets the peak to the
    /// current live allocation level.
    pub fn start() -> Self {
        let baseline = CURRENT_BYTES.load(Ordering::Relaxed);
        PEAK_BYTES.store(baseline, Ordering::Relaxed);
        Self {
            started: Instant::now(),
            baseline_bytes: baseline,
        }
    }

    /// Stops measuring and returns the elapsed time and peak heap growth.
    pub fn finish(self) -> Measurement {
        let elapsed = self.started.elapsed();
        let peak = PEAK_BYTES
            .load(Ordering::Relaxed)
            .max(CURRENT_BYTES.load(Ordering::Relaxed));
        let peak_mem_kb = peak.saturating_sub(self.baseline_bytes) as f64 / 1024.0;
        Measurement {
            elapsed,
            peak_mem_kb,
        }
    }
}
