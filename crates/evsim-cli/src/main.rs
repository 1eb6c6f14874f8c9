//! `evsim` — command-line runner for the elevator group simulator test
//! harness: loads a JSON test-suite config, runs it across a worker pool,
//! and prints a summary table.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use evsim_algorithm::AlgorithmRegistry;
use evsim_harness::{HarnessConfig, TestSuite};
use evsim_output::{OutputWriter, ResultsWriter};

const DEFAULT_SUITE: &str = include_str!("../assets/default_suite.json");

/// Run a batch of elevator scheduling tests and report aggregated statistics.
#[derive(Parser)]
#[command(name = "evsim", about = "Elevator group simulator test harness")]
struct Cli {
    /// Path to a JSON test-suite config. Defaults to a bundled example suite.
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => HarnessConfig::from_path(path).with_context(|| format!("loading test config from {}", path.display()))?,
        None => {
            log::info!("no config path given, running the bundled example suite");
            HarnessConfig::from_json(DEFAULT_SUITE).context("parsing the bundled example suite")?
        }
    };

    let mut registry = AlgorithmRegistry::new();
    evsim_algorithms::register_all(&mut registry).context("registering built-in scheduling policies")?;
    let registry = Arc::new(registry);

    let mut suite = TestSuite::new(registry, config.tests).include_raw_stats(config.options.include_raw_stats);
    if let Some(max_processes) = config.options.max_processes {
        suite = suite.max_processes(max_processes);
    }
    #[cfg(feature = "artifact")]
    {
        suite = suite.export_artifacts(config.options.export_artifacts);
    }
    #[cfg(not(feature = "artifact"))]
    if config.options.export_artifacts {
        log::warn!("export_artifacts requested but this binary was built without the `artifact` feature; ignoring");
    }

    let mut writers: Vec<Box<dyn OutputWriter>> = vec![Box::new(ResultsWriter::new("results"))];
    #[cfg(feature = "artifact")]
    if config.options.export_artifacts {
        writers.push(Box::new(evsim_output::ArtifactWriter::new("exports")));
    }

    log::info!("starting test suite");
    let results = suite.run(&mut writers).context("running test suite")?;

    print_summary(&results);
    Ok(())
}

fn print_summary(results: &[evsim_harness::SuiteResult]) {
    println!("{:<22} {:<14} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10}", "Test", "Algorithm", "Iters", "Timed Out", "Ticks", "Wait", "InLift", "Occup.");
    println!("{}", "-".repeat(100));
    for result in results {
        let agg = &result.record.stats.aggregated;
        println!(
            "{:<22} {:<14} {:>6} {:>10} {:>10.1} {:>10.1} {:>10.1} {:>10.1}",
            result.record.name, result.record.algorithm_name, result.record.total_iterations, result.timed_out, agg.ticks.mean, agg.wait_time.mean, agg.time_in_lift.mean, agg.occupancy.mean,
        );
    }
}
