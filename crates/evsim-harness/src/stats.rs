//! Aggregation across one `TestSettings`'s iterations.

use evsim_model::{CombinedStats, GeneratedStats};
use evsim_output::{AggregatedStats, EngineSnapshot, RawStats};

/// One job's measurements: total ticks, the three per-run sample
/// distributions the engine collected, and (when requested) a snapshot of
/// the initial, pre-run engine state for the artifact backend.
pub(crate) struct JobOutcome {
    pub ticks: f64,
    pub wait_time: GeneratedStats,
    pub time_in_lift: GeneratedStats,
    pub occupancy: GeneratedStats,
    pub initial_snapshot: Option<EngineSnapshot>,
}

/// Combines the `JobOutcome`s of every completed iteration of one
/// `TestSettings` entry. A run that timed out contributes nothing here — it
/// is counted separately by the caller.
#[derive(Default)]
pub struct TestStats {
    pub ticks: CombinedStats,
    pub wait_time: CombinedStats,
    pub time_in_lift: CombinedStats,
    pub occupancy: CombinedStats,
}

impl TestStats {
    pub(crate) fn append(&mut self, outcome: &JobOutcome) {
        let mut ticks = GeneratedStats::new();
        ticks.push(outcome.ticks);
        self.ticks.append(ticks);
        self.wait_time.append(outcome.wait_time.clone());
        self.time_in_lift.append(outcome.time_in_lift.clone());
        self.occupancy.append(outcome.occupancy.clone());
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    pub fn aggregated(&self) -> AggregatedStats {
        AggregatedStats {
            ticks: self.ticks.summary(),
            wait_time: self.wait_time.summary(),
            time_in_lift: self.time_in_lift.summary(),
            occupancy: self.occupancy.summary(),
        }
    }

    /// Flattens every run's raw samples into one series per metric. `ticks`
    /// is one scalar per run; the others keep every per-load sample from
    /// every run.
    pub fn raw(&self) -> RawStats {
        let flatten = |combined: &CombinedStats| combined.runs.iter().flat_map(|run| run.values().to_vec()).collect();
        RawStats {
            ticks: flatten(&self.ticks),
            wait_time: flatten(&self.wait_time),
            time_in_lift: flatten(&self.time_in_lift),
            occupancy: flatten(&self.occupancy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(ticks: f64) -> JobOutcome {
        let mut wait_time = GeneratedStats::new();
        wait_time.push(ticks / 2.0);
        JobOutcome { ticks, wait_time, time_in_lift: GeneratedStats::new(), occupancy: GeneratedStats::new(), initial_snapshot: None }
    }

    #[test]
    fn aggregated_ticks_mean_matches_plain_average() {
        let mut stats = TestStats::default();
        stats.append(&outcome(10.0));
        stats.append(&outcome(20.0));
        stats.append(&outcome(30.0));

        assert_eq!(stats.aggregated().ticks.mean, 20.0);
        assert_eq!(stats.len(), 3);
    }

    #[test]
    fn raw_ticks_has_one_entry_per_run() {
        let mut stats = TestStats::default();
        stats.append(&outcome(5.0));
        stats.append(&outcome(7.0));
        assert_eq!(stats.raw().ticks, vec![5.0, 7.0]);
    }
}
