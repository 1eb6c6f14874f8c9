//! The `OutputWriter` trait implemented by both output backends.

use crate::error::OutputResult;
use crate::schema::ResultRecord;
#[cfg(feature = "artifact")]
use crate::snapshot::EngineSnapshot;

/// Trait implemented by the results writer and (behind the `artifact`
/// feature) the run-artifact writer.
///
/// Every method has a no-op default so the harness and manager can hold a
/// `Vec<Box<dyn OutputWriter>>` and call both methods on every configured
/// backend without caring which one actually does something — matching
/// `dt-output`'s convention of a single small trait shared by writers with
/// disjoint responsibilities.
pub trait OutputWriter {
    /// Append result records for one harness run. Called once per harness
    /// invocation by the results backend; a no-op for the artifact backend.
    fn write_results(&mut self, _records: &[ResultRecord]) -> OutputResult<()> {
        Ok(())
    }

    /// Export one job's final engine state. Called per job by the artifact
    /// backend; a no-op for the results backend.
    #[cfg(feature = "artifact")]
    fn write_snapshot(&mut self, _name: &str, _snapshot: &EngineSnapshot) -> OutputResult<()> {
        Ok(())
    }

    /// Flush and close any underlying file handles. Idempotent.
    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}
