//! `TestSuite` — expands every `TestSettings` into iteration jobs, runs them
//! across a bounded Rayon worker pool, and aggregates + persists the result.

use std::sync::Arc;

use evsim_algorithm::AlgorithmRegistry;
use evsim_output::{OutputWriter, ResultRecord, StatsBlock};
use rayon::prelude::*;

use crate::error::{HarnessError, HarnessResult};
use crate::job::run_job;
use crate::settings::TestSettings;
use crate::stats::TestStats;

/// One completed `TestSettings` entry's aggregated result, plus how many of
/// its iterations timed out.
pub struct SuiteResult {
    pub record: ResultRecord,
    pub timed_out: u32,
}

/// Runs a batch of [`TestSettings`] across a Rayon worker pool sized
/// `min(available_parallelism - 1, total_jobs)`, the same bound the source
/// computes once for the whole suite rather than per test.
pub struct TestSuite {
    registry: Arc<AlgorithmRegistry>,
    tests: Vec<TestSettings>,
    include_raw_stats: bool,
    export_artifacts: bool,
    max_processes: Option<usize>,
}

impl TestSuite {
    pub fn new(registry: Arc<AlgorithmRegistry>, tests: Vec<TestSettings>) -> Self {
        Self { registry, tests, include_raw_stats: false, export_artifacts: false, max_processes: None }
    }

    pub fn include_raw_stats(mut self, flag: bool) -> Self {
        self.include_raw_stats = flag;
        self
    }

    /// When set, each job's pre-run engine state is captured and handed to
    /// every writer's `write_snapshot` (the `artifact` feature's backend;
    /// other writers ignore it via the trait's no-op default).
    pub fn export_artifacts(mut self, flag: bool) -> Self {
        self.export_artifacts = flag;
        self
    }

    pub fn max_processes(mut self, n: usize) -> Self {
        self.max_processes = Some(n);
        self
    }

    fn worker_count(&self) -> usize {
        let total_jobs: usize = self.tests.iter().map(|t| t.total_iterations as usize).sum();
        let hard_max = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1).saturating_sub(1).max(1).min(total_jobs.max(1));
        self.max_processes.map(|n| n.min(hard_max)).unwrap_or(hard_max)
    }

    /// Runs every test to completion, writes the combined results to each
    /// configured backend, and returns one [`SuiteResult`] per test (in
    /// input order).
    pub fn run(&self, writers: &mut [Box<dyn OutputWriter>]) -> HarnessResult<Vec<SuiteResult>> {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(self.worker_count()).build()?;

        let mut results = Vec::with_capacity(self.tests.len());
        for settings in &self.tests {
            let outcomes = pool.install(|| {
                (0..settings.total_iterations)
                    .into_par_iter()
                    .map(|i| run_job(settings, i + 1, &self.registry, self.export_artifacts))
                    .collect::<Vec<_>>()
            });

            let mut stats = TestStats::default();
            let mut timed_out = 0u32;
            for (i, outcome) in outcomes.into_iter().enumerate() {
                match outcome {
                    Ok(o) => {
                        #[cfg(feature = "artifact")]
                        if let Some(snapshot) = &o.initial_snapshot {
                            let name = format!("{}_{}", settings.name, i + 1);
                            for writer in writers.iter_mut() {
                                writer.write_snapshot(&name, snapshot)?;
                            }
                        }
                        stats.append(&o);
                    }
                    Err(HarnessError::TestTimeout { name, iteration, tick }) => {
                        timed_out += 1;
                        log::warn!("test '{name}' iteration {iteration} stalled at {tick}, skipping");
                    }
                    Err(e) => return Err(e),
                }
            }

            let record = ResultRecord {
                name: settings.name.clone(),
                algorithm_name: settings.algorithm_name.clone(),
                seed: settings.seed,
                speed: settings.speed,
                floors: settings.floors,
                num_elevators: settings.num_elevators,
                num_loads: settings.loads.len() as u32 + settings.num_passengers,
                total_iterations: stats.len() as u32,
                stats: StatsBlock { aggregated: stats.aggregated(), raw: self.include_raw_stats.then(|| stats.raw()) },
            };
            results.push(SuiteResult { record, timed_out });
        }

        let records: Vec<ResultRecord> = results.iter().map(|r| r.record.clone()).collect();
        for writer in writers.iter_mut() {
            writer.write_results(&records)?;
            writer.finish()?;
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use evsim_algorithms::register_all;
    use evsim_output::ResultsWriter;

    use super::*;

    fn registry() -> Arc<AlgorithmRegistry> {
        let mut registry = AlgorithmRegistry::new();
        register_all(&mut registry).unwrap();
        Arc::new(registry)
    }

    #[test]
    fn aggregates_across_iterations_and_writes_one_record_per_test() {
        let tests = vec![
            TestSettings::new("a", "fcfs", 8, 3).num_elevators(1).num_passengers(2).seed(1),
            TestSettings::new("b", "scan", 8, 2).num_elevators(2).num_passengers(2).seed(2),
        ];
        let suite = TestSuite::new(registry(), tests).max_processes(2);

        let dir = tempfile::tempdir().unwrap();
        let mut writers: Vec<Box<dyn OutputWriter>> = vec![Box::new(ResultsWriter::new(dir.path()))];
        let results = suite.run(&mut writers).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].record.total_iterations, 3);
        assert_eq!(results[1].record.total_iterations, 2);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
