//! The always-on results backend: `results/<ISO-8601 datetime>.json`.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;

use crate::error::OutputResult;
use crate::schema::ResultRecord;
use crate::writer::OutputWriter;

/// Buffers result records across a harness run and writes them as one JSON
/// array on [`finish`][OutputWriter::finish].
pub struct ResultsWriter {
    dir: PathBuf,
    records: Vec<ResultRecord>,
    finished: bool,
}

impl ResultsWriter {
    /// `dir` is the results directory; it is created on `finish` if missing.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), records: Vec::new(), finished: false }
    }
}

impl OutputWriter for ResultsWriter {
    fn write_results(&mut self, records: &[ResultRecord]) -> OutputResult<()> {
        self.records.extend_from_slice(records);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        fs::create_dir_all(&self.dir)?;
        let filename = format!("{}.json", Utc::now().format("%Y-%m-%dT%H-%M-%S%.3fZ"));
        let file = fs::File::create(self.dir.join(filename))?;
        serde_json::to_writer_pretty(file, &self.records)?;
        Ok(())
    }
}
