// File: crates/chart-lod/src/perf.rs
// Summary: Performance recorder (named timings + memory snapshots) and before/after comparison.
// Notes:
// - Timers are keyed by name only. Interleaving two measurements under the
//   same name overwrites the first start; share a recorder behind a Mutex.

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use serde::Serialize;
use tracing::trace;

use crate::memory::{MemoryProbe, MemoryUsage, ProcessMemory};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorySnapshot {
    pub label: String,
    pub timestamp_ms: i64,
    pub used_bytes: u64,
    pub total_bytes: u64,
    pub limit_bytes: u64,
}

/// Aggregate over every recorded duration of one name, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TimingStats {
    pub count: usize,
    pub total: f64,
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

impl TimingStats {
    fn from_durations(durations: &[f64]) -> Self {
        let total: f64 = durations.iter().sum();
        let count = durations.len();
        Self {
            count,
            total,
            average: if count == 0 { 0.0 } else { total / count as f64 },
            min: durations.iter().copied().fold(f64::INFINITY, f64::min),
            max: durations.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PerfReport {
    pub timings: BTreeMap<String, TimingStats>,
    /// Memory usage when the report was generated, if the probe can tell.
    pub memory: Option<MemoryUsage>,
    pub snapshots: Vec<MemorySnapshot>,
}

pub struct PerfRecorder {
    probe: Box<dyn MemoryProbe>,
    starts: HashMap<String, Instant>,
    timings: BTreeMap<String, Vec<f64>>,
    snapshots: Vec<MemorySnapshot>,
}

impl Default for PerfRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl PerfRecorder {
    /// Recorder backed by the process memory probe.
    pub fn new() -> Self {
        Self::with_probe(ProcessMemory)
    }

    pub fn with_probe(probe: impl MemoryProbe + 'static) -> Self {
        Self {
            probe: Box::new(probe),
            starts: HashMap::new(),
            timings: BTreeMap::new(),
            snapshots: Vec::new(),
        }
    }

    pub fn start_timing(&mut self, name: impl Into<String>) {
        self.starts.insert(name.into(), Instant::now());
    }

    /// Stop the timer `name` and record its duration in milliseconds.
    /// Without a matching `start_timing` this records nothing and returns 0.
    pub fn end_timing(&mut self, name: &str) -> f64 {
        let Some(started) = self.starts.remove(name) else {
            return 0.0;
        };
        let ms = started.elapsed().as_secs_f64() * 1000.0;
        trace!(name, ms, "timing recorded");
        self.timings.entry(name.to_string()).or_default().push(ms);
        ms
    }

    /// Time `f` under `name`.
    pub fn time<T>(&mut self, name: &str, f: impl FnOnce() -> T) -> T {
        self.start_timing(name);
        let out = f();
        self.end_timing(name);
        out
    }

    /// Record current memory usage under `label`; skipped when the probe has no figures.
    pub fn take_memory_snapshot(&mut self, label: impl Into<String>) {
        let Some(usage) = self.probe.usage() else {
            return;
        };
        self.snapshots.push(MemorySnapshot {
            label: label.into(),
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
            used_bytes: usage.used_bytes,
            total_bytes: usage.total_bytes,
            limit_bytes: usage.limit_bytes,
        });
    }

    pub fn snapshots(&self) -> &[MemorySnapshot] {
        &self.snapshots
    }

    pub fn reset(&mut self) {
        self.starts.clear();
        self.timings.clear();
        self.snapshots.clear();
    }

    pub fn generate_report(&self) -> PerfReport {
        PerfReport {
            timings: self
                .timings
                .iter()
                .map(|(name, durations)| (name.clone(), TimingStats::from_durations(durations)))
                .collect(),
            memory: self.probe.usage(),
            snapshots: self.snapshots.clone(),
        }
    }
}

/// One render measured by the caller. Zero means "not measured".
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderMetrics {
    pub render_time_ms: f64,
    pub memory_bytes: f64,
    pub fps: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MetricDelta {
    pub before: f64,
    pub after: f64,
    /// Percent improvement, two decimals. 0 when `before` was not measured.
    pub improvement: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfComparison {
    pub render_time: MetricDelta,
    pub memory: MetricDelta,
    pub fps: MetricDelta,
}

/// Compare two renders. Lower is better for time and memory, higher for fps.
pub fn compare_performance(before: &RenderMetrics, after: &RenderMetrics) -> PerfComparison {
    PerfComparison {
        render_time: delta(before.render_time_ms, after.render_time_ms, false),
        memory: delta(before.memory_bytes, after.memory_bytes, false),
        fps: delta(before.fps, after.fps, true),
    }
}

fn delta(before: f64, after: f64, higher_is_better: bool) -> MetricDelta {
    let improvement = if before > 0.0 {
        let gain = if higher_is_better { after - before } else { before - after };
        (gain / before * 100.0 * 100.0).round() / 100.0
    } else {
        0.0
    };
    MetricDelta { before, after, improvement }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_over_durations() {
        let s = TimingStats::from_durations(&[2.0, 4.0, 9.0]);
        assert_eq!(s.count, 3);
        assert_eq!(s.total, 15.0);
        assert_eq!(s.average, 5.0);
        assert_eq!(s.min, 2.0);
        assert_eq!(s.max, 9.0);
    }

    #[test]
    fn improvement_rounds_to_two_decimals() {
        assert_eq!(delta(3.0, 2.0, false).improvement, 33.33);
        assert_eq!(delta(0.0, 5.0, false).improvement, 0.0);
    }
}
