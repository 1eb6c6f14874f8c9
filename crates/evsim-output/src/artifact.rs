//! The opt-in `.esi` run-artifact backend (behind the `artifact` feature):
//! `exports/<datetime>_<name>.esi`.
//!
//! Layout: an ASCII preamble, a gzip-compressed serialized
//! [`EngineSnapshot`], then the same preamble repeated as a trailing
//! sentinel. Readers strip both preambles and decompress.

use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

use chrono::Utc;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{OutputError, OutputResult};
use crate::snapshot::EngineSnapshot;
use crate::writer::OutputWriter;

const MARKER: &str = "fourjr/elevator-simulator";
/// Fixed width of `Utc::now().format("%Y-%m-%dT%H-%M-%S%.3fZ")`.
const DATETIME_LEN: usize = 24;

fn preamble(datetime: &str) -> Vec<u8> {
    format!("{MARKER} {datetime} {MARKER}\0\0").into_bytes()
}

fn preamble_len() -> usize {
    MARKER.len() * 2 + DATETIME_LEN + 4 // two separating spaces + the trailing "\0\0"
}

/// Writes `.esi` run artifacts to a configured export directory.
pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    /// `dir` is the export directory; it is created on first write if
    /// missing.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl OutputWriter for ArtifactWriter {
    fn write_snapshot(&mut self, name: &str, snapshot: &EngineSnapshot) -> OutputResult<()> {
        fs::create_dir_all(&self.dir)?;
        let datetime = Utc::now().format("%Y-%m-%dT%H-%M-%S%.3fZ").to_string();
        let frame = preamble(&datetime);

        let json = serde_json::to_vec(snapshot)?;
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&json)?;
        let compressed = encoder.finish()?;

        let filename = format!("{datetime}_{name}.esi");
        let mut file = fs::File::create(self.dir.join(filename))?;
        file.write_all(&frame)?;
        file.write_all(&compressed)?;
        file.write_all(&frame)?;
        Ok(())
    }
}

/// Reads an `.esi` artifact back into an [`EngineSnapshot`], verifying the
/// leading and trailing preambles match before decompressing the body.
pub fn read_artifact(bytes: &[u8]) -> OutputResult<EngineSnapshot> {
    let len = preamble_len();
    if bytes.len() < len * 2 {
        return Err(OutputError::BadPreamble { expected: format!("at least {} bytes", len * 2), found: format!("{} bytes", bytes.len()) });
    }
    let head = &bytes[..len];
    let tail = &bytes[bytes.len() - len..];
    if head != tail {
        return Err(OutputError::BadPreamble {
            expected: String::from_utf8_lossy(head).into_owned(),
            found: String::from_utf8_lossy(tail).into_owned(),
        });
    }

    let body = &bytes[len..bytes.len() - len];
    let mut decoder = GzDecoder::new(body);
    let mut json = Vec::new();
    decoder.read_to_end(&mut json)?;
    Ok(serde_json::from_slice(&json)?)
}

#[cfg(test)]
mod tests {
    use evsim_core::Tick;

    use super::*;

    fn sample_snapshot() -> EngineSnapshot {
        EngineSnapshot {
            floors: 10,
            max_load: 900,
            tick_count: Tick(42),
            elevators: Vec::new(),
            loads: Vec::new(),
            wait_times: vec![1.0, 2.0],
            time_in_lift: vec![3.0],
            occupancy: vec![50.0],
        }
    }

    #[test]
    fn round_trips_through_a_written_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = ArtifactWriter::new(dir.path());
        let snapshot = sample_snapshot();
        writer.write_snapshot("run-1", &snapshot).unwrap();

        let entry = fs::read_dir(dir.path()).unwrap().next().unwrap().unwrap();
        let bytes = fs::read(entry.path()).unwrap();
        let restored = read_artifact(&bytes).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn rejects_truncated_input() {
        let err = read_artifact(b"too short").unwrap_err();
        assert!(matches!(err, OutputError::BadPreamble { .. }));
    }
}
