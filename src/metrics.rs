// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Metrics instrumentation for filter-translator.
//!
//! Uses the `metrics` crate for backend-agnostic metrics collection.
//! The embedding service is responsible for installing a recorder; without
//! one every call here is a no-op.
//!
//! # Metric Naming Convention
//! - `filter_translator_` prefix for all metrics
//! - `_total` suffix for counters
//! - `_seconds` suffix for duration histograms

use metrics::{counter, gauge, histogram};
use std::time::{Duration, Instant};

/// Record a finished compilation (`status`: success, error)
pub fn record_compile(status: &str) {
    counter!(
        "filter_translator_compilations_total",
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record compilation latency
pub fn record_compile_latency(duration: Duration) {
    histogram!("filter_translator_compile_seconds").record(duration.as_secs_f64());
}

/// Record a translation table lookup
pub fn record_lookup(hit: bool) {
    counter!(
        "filter_translator_lookups_total",
        "outcome" => if hit { "hit" } else { "miss" }
    )
    .increment(1);
}

/// Set the entry count of the most recently loaded table
pub fn set_table_entries(count: usize) {
    gauge!("filter_translator_table_entries").set(count as f64);
}

/// Records compile latency when dropped
pub struct LatencyTimer {
    start: Instant,
}

impl LatencyTimer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for LatencyTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        record_compile_latency(self.start.elapsed());
    }
}

/// Convenience macro for timing a compilation
#[macro_export]
macro_rules! time_compile {
    () => {
        $crate::metrics::LatencyTimer::new()
    };
}
