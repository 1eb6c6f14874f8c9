//! Streaming statistics accumulators.
//!
//! `GeneratedStats` summarizes one run's raw samples (min/mean/median/max).
//! `CombinedStats` aggregates several `GeneratedStats` (or raw scalars)
//! across the iterations of a test harness job.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatSummary {
    pub mean: f64,
    pub median: f64,
    pub minimum: f64,
    pub maximum: f64,
}

/// Summarizes a single run's raw sample list.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratedStats {
    values: Vec<f64>,
}

impl GeneratedStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn summary(&self) -> StatSummary {
        if self.values.is_empty() {
            return StatSummary::default();
        }
        let mut sorted = self.values.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let sum: f64 = sorted.iter().sum();
        let mean = sum / sorted.len() as f64;
        let median = if sorted.len() % 2 == 0 {
            let mid = sorted.len() / 2;
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[sorted.len() / 2]
        };
        StatSummary {
            mean,
            median,
            minimum: sorted[0],
            maximum: sorted[sorted.len() - 1],
        }
    }
}

/// Aggregates statistics across multiple iterations of a harness job.
///
/// Each `append` accepts one run's `GeneratedStats`; the combined summary is
/// taken over the per-run *means*, matching the aggregated view the harness
/// reports for a `TestSettings` entry.
#[derive(Clone, Debug, Default)]
pub struct CombinedStats {
    pub runs: Vec<GeneratedStats>,
}

impl CombinedStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, run: GeneratedStats) {
        self.runs.push(run);
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn summary(&self) -> StatSummary {
        let mut per_run_means = GeneratedStats::new();
        for run in &self.runs {
            per_run_means.push(run.summary().mean);
        }
        per_run_means.summary()
    }
}
