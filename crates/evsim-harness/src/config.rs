//! JSON test-suite configuration (§4.10 / §6): a required `tests` array plus
//! an optional `options` object. Unknown keys are always an error.

use evsim_core::constants::{DEFAULT_MAX_LOAD, SPEED_INFINITE};
use serde::Deserialize;

use crate::error::{HarnessError, HarnessResult};
use crate::settings::TestSettings;

#[derive(Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ConfigOptions {
    pub max_processes: Option<usize>,
    pub include_raw_stats: bool,
    #[serde(rename = "export_artefacts")]
    pub export_artifacts: bool,
}

impl Default for ConfigOptions {
    fn default() -> Self {
        Self { max_processes: None, include_raw_stats: false, export_artifacts: false }
    }
}

/// One JSON `tests[]` record. Deserializes into a [`TestSettings`] — the
/// `init_function`/`on_tick` hooks have no JSON representation and are
/// always `None` for config-loaded tests.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TestSettingsRecord {
    name: String,
    algorithm_name: String,
    #[serde(default)]
    seed: u64,
    #[serde(default = "default_speed")]
    speed: f64,
    floors: u32,
    num_elevators: u32,
    #[serde(default)]
    num_passengers: u32,
    #[serde(default = "default_max_load")]
    max_load: u32,
    total_iterations: u32,
    #[serde(default)]
    loads: Vec<(u32, u32)>,
}

fn default_speed() -> f64 {
    SPEED_INFINITE
}

fn default_max_load() -> u32 {
    DEFAULT_MAX_LOAD
}

impl From<TestSettingsRecord> for TestSettings {
    fn from(record: TestSettingsRecord) -> Self {
        TestSettings::new(record.name, record.algorithm_name, record.floors, record.total_iterations)
            .seed(record.seed)
            .speed(record.speed)
            .num_elevators(record.num_elevators)
            .num_passengers(record.num_passengers)
            .max_load(record.max_load)
            .loads(record.loads)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields, default)]
struct HarnessConfigRecord {
    options: ConfigOptions,
    tests: Vec<TestSettingsRecord>,
}

impl Default for HarnessConfigRecord {
    fn default() -> Self {
        Self { options: ConfigOptions::default(), tests: Vec::new() }
    }
}

/// A fully parsed test-suite configuration: the run options plus the list of
/// tests to execute.
pub struct HarnessConfig {
    pub options: ConfigOptions,
    pub tests: Vec<TestSettings>,
}

impl HarnessConfig {
    /// Parses `json`, rejecting unknown fields and missing required ones as
    /// `InvalidConfig`.
    pub fn from_json(json: &str) -> HarnessResult<Self> {
        let record: HarnessConfigRecord = serde_json::from_str(json).map_err(|e| HarnessError::InvalidConfig(e.to_string()))?;
        if record.tests.is_empty() {
            return Err(HarnessError::InvalidConfig("config must declare at least one test".into()));
        }
        Ok(Self { options: record.options, tests: record.tests.into_iter().map(TestSettings::from).collect() })
    }

    pub fn from_path(path: impl AsRef<std::path::Path>) -> HarnessResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_config() {
        let json = r#"{
            "tests": [
                { "name": "t1", "algorithm_name": "fcfs", "floors": 10, "num_elevators": 2, "total_iterations": 3 }
            ]
        }"#;
        let config = HarnessConfig::from_json(json).unwrap();
        assert_eq!(config.tests.len(), 1);
        assert_eq!(config.tests[0].speed, SPEED_INFINITE);
        assert_eq!(config.tests[0].max_load, DEFAULT_MAX_LOAD);
    }

    #[test]
    fn rejects_unknown_top_level_keys() {
        let json = r#"{ "tests": [], "bogus": true }"#;
        assert!(HarnessConfig::from_json(json).is_err());
    }

    #[test]
    fn rejects_unknown_test_keys() {
        let json = r#"{
            "tests": [
                { "name": "t1", "algorithm_name": "fcfs", "floors": 10, "num_elevators": 1, "total_iterations": 1, "typo_field": 1 }
            ]
        }"#;
        assert!(HarnessConfig::from_json(json).is_err());
    }

    #[test]
    fn rejects_missing_required_field() {
        let json = r#"{ "tests": [ { "name": "t1", "floors": 10 } ] }"#;
        assert!(HarnessConfig::from_json(json).is_err());
    }

    #[test]
    fn empty_tests_array_is_invalid() {
        let json = r#"{ "tests": [] }"#;
        assert!(HarnessConfig::from_json(json).is_err());
    }

    #[test]
    fn options_accept_the_documented_export_artefacts_key() {
        let json = r#"{
            "options": { "export_artefacts": true },
            "tests": [
                { "name": "t1", "algorithm_name": "fcfs", "floors": 10, "num_elevators": 1, "total_iterations": 1 }
            ]
        }"#;
        let config = HarnessConfig::from_json(json).unwrap();
        assert!(config.options.export_artifacts);
    }

    #[test]
    fn options_reject_the_undocumented_spelling() {
        let json = r#"{
            "options": { "export_artifacts": true },
            "tests": [
                { "name": "t1", "algorithm_name": "fcfs", "floors": 10, "num_elevators": 1, "total_iterations": 1 }
            ]
        }"#;
        assert!(HarnessConfig::from_json(json).is_err());
    }
}
