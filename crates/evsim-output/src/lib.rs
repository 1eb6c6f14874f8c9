//! `evsim-output` — output backends for the elevator group simulator test
//! harness.
//!
//! | Feature      | Backend    | Output                                    |
//! |--------------|------------|--------------------------------------------|
//! | *(none)*     | JSON       | `results/<ISO-8601 datetime>.json`        |
//! | `artifact`   | `.esi`     | `exports/<datetime>_<name>.esi`           |
//!
//! Both backends implement [`OutputWriter`] so the harness and manager can
//! hold either behind a trait object without depending on the concrete
//! backend.

pub mod error;
pub mod results;
pub mod schema;
pub mod snapshot;
pub mod writer;

#[cfg(feature = "artifact")]
pub mod artifact;

pub use error::{OutputError, OutputResult};
pub use results::ResultsWriter;
pub use schema::{AggregatedStats, RawStats, ResultRecord, StatsBlock};
pub use snapshot::EngineSnapshot;
pub use writer::OutputWriter;

#[cfg(feature = "artifact")]
pub use artifact::{read_artifact, ArtifactWriter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_writer_creates_one_json_file_per_finish() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = ResultsWriter::new(dir.path());
        writer
            .write_results(&[ResultRecord {
                name: "s1".into(),
                algorithm_name: "fcfs".into(),
                seed: 0,
                speed: 1.0,
                floors: 10,
                num_elevators: 2,
                num_loads: 5,
                total_iterations: 3,
                stats: StatsBlock {
                    aggregated: AggregatedStats {
                        ticks: Default::default(),
                        wait_time: Default::default(),
                        time_in_lift: Default::default(),
                        occupancy: Default::default(),
                    },
                    raw: None,
                },
            }])
            .unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap(); // idempotent

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1, "finish() should not create a second file on repeat calls");
    }
}
