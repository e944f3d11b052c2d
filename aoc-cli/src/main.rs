//! AOC CLI - Command-line interface for running Advent of Code solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod input;
mod logging;
mod output;

// Link the 2024 solutions so their plugins are registered
use aoc_2024 as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;
use tracing::{error, info, warn};

fn main() {
    logging::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        error!(error = %e, "run failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;
    info!(solvers = registry.storage().len(), "registry built");

    let executor =
        Executor::new(registry, &config).map_err(|e| CliError::Executor(e.into()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // Report missing inputs up front; the affected parts fail individually
    let missing = executor.missing_inputs(&work_items);
    if !missing.is_empty() {
        println!("Missing {} input file(s):", missing.len());
        for work in &missing {
            println!(
                "  - {}/day{:02} (expected at {})",
                work.year,
                work.day,
                executor.input_path(work).display()
            );
        }
    }

    run_executor(executor, work_items, config.quiet)
}

/// Run the executor and print results in order
fn run_executor(
    executor: Executor,
    work_items: Vec<executor::WorkItem>,
    quiet: bool,
) -> Result<(), CliError> {
    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let expected_keys = work_items.iter().flat_map(|w| {
        w.parts.clone().map(move |p| aggregator::ResultKey {
            year: w.year,
            day: w.day,
            part: p,
        })
    });
    let mut aggregator = aggregator::ResultAggregator::new(expected_keys);

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        for key in aggregator.missing() {
            warn!(year = key.year, day = key.day, part = key.part, "no result received");
        }
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))?
        .map_err(CliError::Executor)?;

    formatter.print_summary(&results);

    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
