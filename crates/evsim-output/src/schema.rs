//! The results-file schema (§6 "Results file").

use evsim_model::StatSummary;
use serde::{Deserialize, Serialize};

/// Aggregated statistics for one `TestSettings` entry, across all its
/// iterations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AggregatedStats {
    pub ticks: StatSummary,
    pub wait_time: StatSummary,
    pub time_in_lift: StatSummary,
    pub occupancy: StatSummary,
}

/// Optional raw per-iteration distributions, included only when the
/// harness's `include_raw_stats` option is set.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawStats {
    pub ticks: Vec<f64>,
    pub wait_time: Vec<f64>,
    pub time_in_lift: Vec<f64>,
    pub occupancy: Vec<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatsBlock {
    pub aggregated: AggregatedStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<RawStats>,
}

/// One record in the results JSON array — one `TestSettings` entry's
/// inputs plus its aggregated (and optionally raw) stats.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResultRecord {
    pub name: String,
    pub algorithm_name: String,
    pub seed: u64,
    pub speed: f64,
    pub floors: u32,
    pub num_elevators: u32,
    pub num_loads: u32,
    pub total_iterations: u32,
    pub stats: StatsBlock,
}
